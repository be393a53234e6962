//! Key chords and the action vocabulary.
//!
//! This module defines the vocabulary the whole document shares:
//! [`Action`] describes every operation a chord can request from the host,
//! and [`KeyBinding`] / [`Modifier`] provide the supporting data types.
//!
//! The base table ([`base_bindings`]) is static data.  The per-group
//! bindings are produced by [`derive_group_bindings`], a pure function:
//! given the group set it returns a fresh sequence of bindings, so a
//! reload never accumulates duplicates in shared state.

use crate::group::Group;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A keyboard modifier used in chord definitions.
///
/// Serialized with the X11 modifier names the host expects (`mod4`,
/// `shift`, `control`, `mod1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// The Super / Windows key (`mod4`).
    #[serde(rename = "mod4")]
    Super,
    #[serde(rename = "shift")]
    Shift,
    #[serde(rename = "control")]
    Control,
    /// The Alt key (`mod1`).
    #[serde(rename = "mod1")]
    Alt,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Super => write!(f, "mod4"),
            Modifier::Shift => write!(f, "shift"),
            Modifier::Control => write!(f, "control"),
            Modifier::Alt => write!(f, "mod1"),
        }
    }
}

/// Every operation a chord can request from the host.
///
/// Actions are declarative: the document never executes them, it only
/// names them.  Execution (layout math, window focus, process spawning)
/// belongs entirely to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Move focus to the window on the left.
    FocusLeft,
    /// Move focus to the window on the right.
    FocusRight,
    /// Move focus down.
    FocusDown,
    /// Move focus up.
    FocusUp,
    /// Move focus to the next window in the stack.
    FocusNext,

    /// Swap the focused window with its left neighbour.
    ShuffleLeft,
    /// Swap the focused window with its right neighbour.
    ShuffleRight,
    /// Swap the focused window downwards.
    ShuffleDown,
    /// Swap the focused window upwards.
    ShuffleUp,

    /// Grow the focused window within the current layout.
    Grow,
    /// Shrink the focused window within the current layout.
    Shrink,
    /// Reset all window sizes in the current layout.
    Normalize,

    /// Close the focused window.
    KillWindow,
    /// Restart the window manager, reloading this document.
    Restart,
    /// Shut the window manager down.
    Shutdown,
    /// Cycle to the next layout in the configured sequence.
    NextLayout,

    /// Spawn an external command.
    Spawn(String),

    /// Switch the active screen to the named group.
    SwitchToGroup(String),

    /// Move the focused window to the named group.
    ///
    /// When `switch` is true the active screen follows the window.
    MoveWindowToGroup { group: String, switch: bool },
}

/// A chord: modifier set + key symbol, bound to an [`Action`].
///
/// Bindings are immutable once built; the full ordered sequence returned
/// by [`Document::key_bindings`](crate::document::Document::key_bindings)
/// defines the active chord table.  Duplicate chords are not resolved
/// here — that is host-defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifiers held for this chord.
    pub mods: Vec<Modifier>,
    /// X11 key symbol name (e.g. `"h"`, `"Return"`, `"Tab"`).
    pub key: String,
    /// The action the host performs when the chord fires.
    pub action: Action,
    /// Human-readable description, shown by host help overlays.
    pub desc: String,
}

impl KeyBinding {
    /// Build a binding from a modifier slice and string literals.
    pub fn new(mods: &[Modifier], key: &str, action: Action, desc: &str) -> Self {
        Self {
            mods: mods.to_vec(),
            key: key.to_string(),
            action,
            desc: desc.to_string(),
        }
    }
}

/// The static base chord table.
///
/// `primary` is the document's primary modifier and `terminal` the
/// configured terminal emulator command.
pub fn base_bindings(primary: Modifier, terminal: &str) -> Vec<KeyBinding> {
    use Action::*;
    let m = primary;
    vec![
        // Switch between windows
        KeyBinding::new(&[m], "h", FocusLeft, "Move focus to left"),
        KeyBinding::new(&[m], "l", FocusRight, "Move focus to right"),
        KeyBinding::new(&[m], "j", FocusDown, "Move focus down"),
        KeyBinding::new(&[m], "k", FocusUp, "Move focus up"),
        KeyBinding::new(&[m], "space", FocusNext, "Move window focus to other window"),
        // Swap windows
        KeyBinding::new(&[m, Modifier::Shift], "h", ShuffleLeft, "Move window to the left"),
        KeyBinding::new(&[m, Modifier::Shift], "l", ShuffleRight, "Move window to the right"),
        KeyBinding::new(&[m, Modifier::Shift], "j", ShuffleDown, "Move window down"),
        KeyBinding::new(&[m, Modifier::Shift], "k", ShuffleUp, "Move window up"),
        // Window resizing
        KeyBinding::new(&[m, Modifier::Control], "h", Grow, "Resize window to the left"),
        KeyBinding::new(&[m, Modifier::Control], "l", Shrink, "Resize window to the right"),
        KeyBinding::new(&[m, Modifier::Control], "j", Shrink, "Resize window down"),
        KeyBinding::new(&[m, Modifier::Control], "k", Grow, "Resize window up"),
        KeyBinding::new(&[m, Modifier::Control], "n", Normalize, "Reset window sizes"),
        // Window manager controls
        KeyBinding::new(&[m, Modifier::Shift], "c", KillWindow, "Kill focused window"),
        KeyBinding::new(&[m, Modifier::Control], "r", Restart, "Restart the window manager"),
        KeyBinding::new(&[m, Modifier::Control], "q", Shutdown, "Shutdown the window manager"),
        KeyBinding::new(&[m], "Tab", NextLayout, "Toggle between layouts"),
        // Launch applications
        KeyBinding::new(&[m], "Return", Spawn(terminal.to_string()), "Launch terminal"),
        KeyBinding::new(
            &[m, Modifier::Shift],
            "Return",
            Spawn("rofi -show run".to_string()),
            "Spawn rofi launcher",
        ),
    ]
}

/// Derive the per-group chord pair for every group.
///
/// For each group `g` this returns exactly two bindings, in group order:
///
/// * `[primary] + g` — switch the active screen to `g`
/// * `[primary, shift] + g` — move the focused window to `g` and follow it
///
/// The function is pure: it never touches shared state, so calling it
/// again (e.g. on restart) yields an identical fresh sequence rather than
/// appending to a previous one.
pub fn derive_group_bindings(primary: Modifier, groups: &[Group]) -> Vec<KeyBinding> {
    let mut derived = Vec::with_capacity(groups.len() * 2);
    for group in groups {
        derived.push(KeyBinding::new(
            &[primary],
            &group.name,
            Action::SwitchToGroup(group.name.clone()),
            &format!("Switch to group {}", group.name),
        ));
        derived.push(KeyBinding::new(
            &[primary, Modifier::Shift],
            &group.name,
            Action::MoveWindowToGroup {
                group: group.name.clone(),
                switch: true,
            },
            &format!("Switch to & move focused window to group {}", group.name),
        ));
    }
    derived
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(names: &[&str]) -> Vec<Group> {
        names.iter().map(|n| Group::new(*n)).collect()
    }

    #[test]
    fn modifier_display() {
        assert_eq!(Modifier::Super.to_string(), "mod4");
        assert_eq!(Modifier::Shift.to_string(), "shift");
        assert_eq!(Modifier::Control.to_string(), "control");
        assert_eq!(Modifier::Alt.to_string(), "mod1");
    }

    #[test]
    fn base_table_has_twenty_chords() {
        let keys = base_bindings(Modifier::Super, "urxvt");
        assert_eq!(keys.len(), 20);
    }

    #[test]
    fn base_table_spawns_configured_terminal() {
        let keys = base_bindings(Modifier::Super, "alacritty");
        assert!(keys
            .iter()
            .any(|k| k.action == Action::Spawn("alacritty".into()) && k.key == "Return"));
    }

    #[test]
    fn derives_two_bindings_per_group() {
        let gs = groups(&["1", "2", "3"]);
        let derived = derive_group_bindings(Modifier::Super, &gs);
        assert_eq!(derived.len(), 6);
        for name in ["1", "2", "3"] {
            assert!(derived
                .iter()
                .any(|k| k.action == Action::SwitchToGroup(name.into())));
            assert!(derived.iter().any(|k| k.action
                == Action::MoveWindowToGroup {
                    group: name.into(),
                    switch: true,
                }));
        }
    }

    #[test]
    fn derived_switch_chord_uses_primary_only() {
        let derived = derive_group_bindings(Modifier::Super, &groups(&["4"]));
        assert_eq!(derived[0].mods, vec![Modifier::Super]);
        assert_eq!(derived[0].key, "4");
        assert_eq!(derived[1].mods, vec![Modifier::Super, Modifier::Shift]);
        assert_eq!(derived[1].key, "4");
    }

    #[test]
    fn derivation_is_pure_across_calls() {
        let gs = groups(&["1", "2"]);
        let first = derive_group_bindings(Modifier::Super, &gs);
        let second = derive_group_bindings(Modifier::Super, &gs);
        assert_eq!(first, second);
        assert_eq!(second.len(), 4);
    }

    #[test]
    fn empty_group_set_derives_nothing() {
        assert!(derive_group_bindings(Modifier::Super, &[]).is_empty());
    }
}
