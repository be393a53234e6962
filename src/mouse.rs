//! Mouse bindings for floating-window manipulation.
//!
//! The host interprets these: a [`MouseBinding::Drag`] makes the host track
//! pointer motion while the chord is held, a [`MouseBinding::Click`] fires
//! once on press.

use crate::keys::Modifier;
use serde::{Deserialize, Serialize};

/// Pointer button in a mouse chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    #[serde(rename = "Button1")]
    Left,
    #[serde(rename = "Button2")]
    Middle,
    #[serde(rename = "Button3")]
    Right,
}

/// Window operation requested by a mouse chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowAction {
    /// Move the window while dragging (floats it if tiled).
    SetPositionFloating,
    /// Resize the window while dragging (floats it if tiled).
    SetSizeFloating,
    /// Raise the window above all others.
    BringToFront,
}

/// A mouse chord bound to a [`WindowAction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseBinding {
    /// Continuous action while the chord is held.
    Drag {
        mods: Vec<Modifier>,
        button: MouseButton,
        action: WindowAction,
    },
    /// One-shot action on press.
    Click {
        mods: Vec<Modifier>,
        button: MouseButton,
        action: WindowAction,
    },
}

/// The default mouse table: drag-to-move, drag-to-resize, click-to-raise.
pub fn default_mouse_bindings(primary: Modifier) -> Vec<MouseBinding> {
    vec![
        MouseBinding::Drag {
            mods: vec![primary],
            button: MouseButton::Left,
            action: WindowAction::SetPositionFloating,
        },
        MouseBinding::Drag {
            mods: vec![primary],
            button: MouseButton::Right,
            action: WindowAction::SetSizeFloating,
        },
        MouseBinding::Click {
            mods: vec![primary],
            button: MouseButton::Middle,
            action: WindowAction::BringToFront,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_three_bindings() {
        let mouse = default_mouse_bindings(Modifier::Super);
        assert_eq!(mouse.len(), 3);
    }

    #[test]
    fn drags_come_before_click() {
        let mouse = default_mouse_bindings(Modifier::Super);
        assert!(matches!(mouse[0], MouseBinding::Drag { .. }));
        assert!(matches!(mouse[1], MouseBinding::Drag { .. }));
        assert!(matches!(
            mouse[2],
            MouseBinding::Click {
                button: MouseButton::Middle,
                ..
            }
        ));
    }
}
