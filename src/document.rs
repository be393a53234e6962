//! The configuration document.
//!
//! [`Document`] aggregates every named top-level value the host reads:
//! primary modifier, terminal, chord tables, groups, layouts, floating
//! rules, screens, widget defaults, flags, and the startup action.  The
//! document has exactly two lifecycle states — unloaded and loaded — and
//! is consumed wholesale on host startup or restart; there is no partial
//! mutation contract.
//!
//! The derived per-group chords are **not** stored: [`Document::key_bindings`]
//! composes the static base table with [`derive_group_bindings`] freshly on
//! every call, so reloading the document can never accumulate duplicates.

use crate::bar::{default_screens, Screen, WidgetDefaults};
use crate::group::{default_groups, Group};
use crate::keys::{base_bindings, derive_group_bindings, KeyBinding, Modifier};
use crate::layout::{default_layouts, Layout};
use crate::mouse::{default_mouse_bindings, MouseBinding};
use crate::rules::FloatingRules;
use crate::startup::StartupAction;
use serde::Serialize;

/// Miscellaneous boolean/string options the host reads verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flags {
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    /// `"smart"`, `"focus"`, or `"never"`.
    pub focus_on_window_activation: String,
    /// Window manager name reported to clients (Java AWT compatibility).
    pub wmname: String,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: "smart".into(),
            wmname: "LG3D".into(),
        }
    }
}

/// The full declarative payload consumed by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Primary modifier used throughout the chord tables.
    pub primary: Modifier,
    /// Terminal emulator command, spawned by the `Return` chord.
    pub terminal: String,
    pub groups: Vec<Group>,
    pub layouts: Vec<Layout>,
    pub floating_layout: FloatingRules,
    pub mouse: Vec<MouseBinding>,
    pub screens: Vec<Screen>,
    pub widget_defaults: WidgetDefaults,
    pub flags: Flags,
    pub startup: StartupAction,
}

impl Default for Document {
    fn default() -> Self {
        let primary = Modifier::Super;
        Self {
            primary,
            terminal: "urxvt".into(),
            groups: default_groups(),
            layouts: default_layouts(),
            floating_layout: FloatingRules::default(),
            mouse: default_mouse_bindings(primary),
            screens: default_screens(),
            widget_defaults: WidgetDefaults::default(),
            flags: Flags::default(),
            startup: StartupAction::autostart(),
        }
    }
}

impl Document {
    /// The complete ordered chord table: base bindings followed by the
    /// derived per-group pairs.
    ///
    /// Composed freshly on every call — the length is always
    /// `base + 2 × groups`, regardless of how many times the document has
    /// been loaded.
    pub fn key_bindings(&self) -> Vec<KeyBinding> {
        let mut keys = base_bindings(self.primary, &self.terminal);
        keys.extend(derive_group_bindings(self.primary, &self.groups));
        keys
    }

    /// Render the document as the fixed-key JSON object the host reads.
    pub fn render(&self) -> Result<serde_json::Value, DocumentError> {
        serde_json::to_value(Rendered::new(self)).map_err(DocumentError)
    }

    /// [`render`](Document::render) as a pretty-printed string, for
    /// inspection tooling.
    pub fn render_string(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(&Rendered::new(self)).map_err(DocumentError)
    }
}

/// Error from rendering the document for the host.
#[derive(Debug, thiserror::Error)]
#[error("document render error: {0}")]
pub struct DocumentError(#[from] serde_json::Error);

/// Wire shape of the host contract: fixed top-level key names.
#[derive(Serialize)]
struct Rendered<'a> {
    #[serde(rename = "mod")]
    primary: Modifier,
    terminal: &'a str,
    keys: Vec<KeyBinding>,
    mouse: &'a [MouseBinding],
    groups: &'a [Group],
    layouts: &'a [Layout],
    floating_layout: &'a FloatingRules,
    screens: &'a [Screen],
    widget_defaults: &'a WidgetDefaults,
    #[serde(flatten)]
    flags: &'a Flags,
}

impl<'a> Rendered<'a> {
    fn new(doc: &'a Document) -> Self {
        Self {
            primary: doc.primary,
            terminal: &doc.terminal,
            keys: doc.key_bindings(),
            mouse: &doc.mouse,
            groups: &doc.groups,
            layouts: &doc.layouts,
            floating_layout: &doc.floating_layout,
            screens: &doc.screens,
            widget_defaults: &doc.widget_defaults,
            flags: &doc.flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Action;

    #[test]
    fn table_length_is_base_plus_two_per_group() {
        let doc = Document::default();
        let base = base_bindings(doc.primary, &doc.terminal).len();
        assert_eq!(doc.key_bindings().len(), base + 2 * doc.groups.len());
    }

    #[test]
    fn three_groups_yield_six_derived_chords() {
        let doc = Document {
            groups: vec![Group::new("1"), Group::new("2"), Group::new("3")],
            ..Document::default()
        };
        let keys = doc.key_bindings();
        for name in ["1", "2", "3"] {
            assert!(keys
                .iter()
                .any(|k| k.action == Action::SwitchToGroup(name.into())));
            assert!(keys.iter().any(|k| k.action
                == Action::MoveWindowToGroup {
                    group: name.into(),
                    switch: true,
                }));
        }
        let base = base_bindings(doc.primary, &doc.terminal).len();
        assert_eq!(keys.len(), base + 6);
    }

    #[test]
    fn regeneration_is_idempotent() {
        let doc = Document::default();
        let first = doc.key_bindings();
        let second = doc.key_bindings();
        assert_eq!(first, second);
    }

    #[test]
    fn render_exposes_fixed_top_level_keys() {
        let doc = Document::default();
        let value = doc.render().unwrap();
        for key in [
            "mod",
            "terminal",
            "keys",
            "mouse",
            "groups",
            "layouts",
            "floating_layout",
            "screens",
            "widget_defaults",
            "follow_mouse_focus",
            "bring_front_click",
            "cursor_warp",
            "auto_fullscreen",
            "focus_on_window_activation",
            "wmname",
        ] {
            assert!(value.get(key).is_some(), "missing top-level key {key}");
        }
    }

    #[test]
    fn rendered_key_table_matches_composition() {
        let doc = Document::default();
        let value = doc.render().unwrap();
        let keys = value["keys"].as_array().unwrap();
        assert_eq!(keys.len(), doc.key_bindings().len());
    }

    #[test]
    fn default_flags_match_builtin_values() {
        let flags = Flags::default();
        assert!(flags.follow_mouse_focus);
        assert!(!flags.bring_front_click);
        assert!(!flags.cursor_warp);
        assert!(flags.auto_fullscreen);
        assert_eq!(flags.focus_on_window_activation, "smart");
        assert_eq!(flags.wmname, "LG3D");
    }
}
