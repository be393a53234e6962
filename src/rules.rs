//! Floating-window rules.
//!
//! A [`WindowMatch`] is a predicate over window properties; any match makes
//! the host render the window floating instead of tiled.  The host supplies
//! [`WindowProps`] (from `WM_CLASS`, `_NET_WM_WINDOW_TYPE`, the title) when
//! it evaluates rules — this module only declares and evaluates predicates.

use serde::{Deserialize, Serialize};

/// Properties of a window, as reported by the host.
///
/// Run `xprop` against an X client to see its class and type values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowProps {
    pub wm_type: Option<String>,
    pub wm_class: Option<String>,
    pub title: Option<String>,
}

/// A single floating rule: match by window type, class, or title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowMatch {
    WmType(String),
    WmClass(String),
    Title(String),
}

impl WindowMatch {
    /// Whether `props` satisfies this rule.
    pub fn matches(&self, props: &WindowProps) -> bool {
        match self {
            WindowMatch::WmType(t) => props.wm_type.as_deref() == Some(t),
            WindowMatch::WmClass(c) => props.wm_class.as_deref() == Some(c),
            WindowMatch::Title(t) => props.title.as_deref() == Some(t),
        }
    }
}

/// The ordered floating-rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingRules {
    pub rules: Vec<WindowMatch>,
}

impl FloatingRules {
    /// Whether any rule matches `props`.
    pub fn should_float(&self, props: &WindowProps) -> bool {
        self.rules.iter().any(|r| r.matches(props))
    }
}

impl Default for FloatingRules {
    fn default() -> Self {
        use WindowMatch::*;
        Self {
            rules: vec![
                WmType("utility".into()),
                WmType("notification".into()),
                WmType("toolbar".into()),
                WmType("splash".into()),
                WmType("dialog".into()),
                WmClass("file_progress".into()),
                WmClass("confirm".into()),
                WmClass("dialog".into()),
                WmClass("download".into()),
                WmClass("error".into()),
                WmClass("notification".into()),
                WmClass("splash".into()),
                WmClass("toolbar".into()),
                WmClass("confirmreset".into()), // gitk
                WmClass("makebranch".into()),   // gitk
                WmClass("maketag".into()),      // gitk
                WmClass("ssh-askpass".into()),
                WmClass("mate-calc".into()),
                Title("branchdialog".into()), // gitk
                Title("pinentry".into()),     // GPG key password entry
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(wm_type: Option<&str>, wm_class: Option<&str>, title: Option<&str>) -> WindowProps {
        WindowProps {
            wm_type: wm_type.map(String::from),
            wm_class: wm_class.map(String::from),
            title: title.map(String::from),
        }
    }

    #[test]
    fn matches_by_type() {
        let rule = WindowMatch::WmType("dialog".into());
        assert!(rule.matches(&props(Some("dialog"), None, None)));
        assert!(!rule.matches(&props(Some("normal"), None, None)));
        assert!(!rule.matches(&props(None, Some("dialog"), None)));
    }

    #[test]
    fn matches_by_class() {
        let rule = WindowMatch::WmClass("ssh-askpass".into());
        assert!(rule.matches(&props(None, Some("ssh-askpass"), None)));
        assert!(!rule.matches(&props(None, None, Some("ssh-askpass"))));
    }

    #[test]
    fn matches_by_title() {
        let rule = WindowMatch::Title("pinentry".into());
        assert!(rule.matches(&props(None, None, Some("pinentry"))));
        assert!(!rule.matches(&props(None, None, Some("pinentry-gtk"))));
    }

    #[test]
    fn default_rules_float_gitk_dialogs() {
        let rules = FloatingRules::default();
        assert!(rules.should_float(&props(None, Some("makebranch"), None)));
        assert!(rules.should_float(&props(None, None, Some("branchdialog"))));
    }

    #[test]
    fn ordinary_window_stays_tiled() {
        let rules = FloatingRules::default();
        assert!(!rules.should_float(&props(Some("normal"), Some("firefox"), Some("Mozilla"))));
    }

    #[test]
    fn empty_props_never_float() {
        let rules = FloatingRules::default();
        assert!(!rules.should_float(&WindowProps::default()));
    }
}
