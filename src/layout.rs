//! The layout cycle.
//!
//! An ordered sequence of [`Layout`]s; the host cycles through it per
//! screen in response to [`Action::NextLayout`](crate::keys::Action).
//! Parameters are cosmetic hints for the host's tiling implementation —
//! no tiling math happens here.

use serde::{Deserialize, Serialize};

/// One entry in the layout cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Layout {
    /// Master-and-stack: one large window left, the rest stacked right.
    MonadTall {
        /// Gap between windows in pixels.
        margin: u32,
        /// Border colour of the focused window (`#rrggbb`).
        border_focus: String,
        /// Border colour of unfocused windows.
        border_normal: String,
    },
    /// Every window fullscreen, one visible at a time.
    Max,
    /// No tiling; windows float freely.
    Floating,
    /// Windows as a tree of tabs in a side panel.
    TreeTab {
        font: String,
        fontsize: u32,
        bg_color: String,
        active_bg: String,
        active_fg: String,
        inactive_bg: String,
        panel_width: u32,
        padding_y: u32,
    },
}

/// The default layout cycle.
pub fn default_layouts() -> Vec<Layout> {
    vec![
        Layout::MonadTall {
            margin: 4,
            border_focus: "#bf7ceb".into(),
            border_normal: "#0c0d12".into(),
        },
        Layout::Max,
        Layout::Floating,
        Layout::TreeTab {
            font: "Hermit".into(),
            fontsize: 10,
            bg_color: "#0b0c17".into(),
            active_bg: "#74c8ef".into(),
            active_fg: "#0c0d12".into(),
            inactive_bg: "#808080".into(),
            panel_width: 220,
            padding_y: 6,
        },
    ]
}
