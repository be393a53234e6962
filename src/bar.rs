//! Screens, bars, and widget specs.
//!
//! A [`Screen`] may carry a top [`Bar`], which is a persistent strip
//! hosting an ordered sequence of [`Widget`]s.  All parameters here are
//! display hints; the host owns rendering and data collection (battery
//! levels, clock ticks, window titles).

use serde::{Deserialize, Serialize};

/// Default styling applied to widgets that do not override it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "Hermit".into(),
            fontsize: 12,
            padding: 3,
        }
    }
}

/// One widget in a bar.
///
/// Colour fields are `#rrggbb` strings; `None` falls back to
/// [`WidgetDefaults`] or the host's builtin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Widget {
    /// Clickable list of groups with the active one highlighted.
    GroupBox {
        this_current_screen_border: String,
        highlight_method: String,
        rounded: bool,
        borderwidth: u32,
        inactive: String,
    },
    /// Static text.
    TextBox {
        text: String,
        name: Option<String>,
        foreground: Option<String>,
    },
    /// Title of the focused window.
    WindowName { foreground: String },
    /// System tray icons.
    Systray,
    /// Battery charge readout.
    Battery { format: String, foreground: String },
    /// Audio volume readout.
    Volume { foreground: String },
    /// Name of the active layout.
    CurrentLayout { foreground: String },
    /// Formatted clock.
    Clock { format: String, foreground: String },
}

impl Widget {
    /// The `"|"` separator used between bar sections.
    pub fn separator() -> Self {
        Widget::TextBox {
            text: "|".into(),
            name: Some("separator".into()),
            foreground: Some("#ffffff".into()),
        }
    }
}

/// A persistent strip of widgets attached to one edge of a screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    /// Bar height in pixels.
    pub height: u32,
    pub background: String,
}

/// A physical screen and its optional top bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub top: Option<Bar>,
}

/// The default screen tree: one screen with a 24-pixel top bar.
pub fn default_screens() -> Vec<Screen> {
    let sep = Widget::separator;
    vec![Screen {
        top: Some(Bar {
            widgets: vec![
                Widget::GroupBox {
                    this_current_screen_border: "ef80ac".into(),
                    highlight_method: "line".into(),
                    rounded: false,
                    borderwidth: 1,
                    inactive: "#808080".into(),
                },
                sep(),
                Widget::WindowName {
                    foreground: "#74c8ef".into(),
                },
                Widget::Systray,
                sep(),
                Widget::TextBox {
                    text: "bat :".into(),
                    name: None,
                    foreground: Some("#bf7ceb".into()),
                },
                Widget::Battery {
                    format: "{percent:2.0%}".into(),
                    foreground: "#bf7ceb".into(),
                },
                sep(),
                Widget::TextBox {
                    text: "vol :".into(),
                    name: None,
                    foreground: Some("#8af331".into()),
                },
                Widget::Volume {
                    foreground: "#8af331".into(),
                },
                sep(),
                Widget::CurrentLayout {
                    foreground: "#e184a8".into(),
                },
                sep(),
                Widget::Clock {
                    format: "%a %d, %H:%M".into(),
                    foreground: "#74c8ef".into(),
                },
            ],
            height: 24,
            background: "#0b0c17".into(),
        }),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_default_screen_with_top_bar() {
        let screens = default_screens();
        assert_eq!(screens.len(), 1);
        let bar = screens[0].top.as_ref().unwrap();
        assert_eq!(bar.height, 24);
        assert_eq!(bar.background, "#0b0c17");
    }

    #[test]
    fn bar_starts_with_groupbox_ends_with_clock() {
        let screens = default_screens();
        let widgets = &screens[0].top.as_ref().unwrap().widgets;
        assert!(matches!(widgets.first(), Some(Widget::GroupBox { .. })));
        assert!(matches!(widgets.last(), Some(Widget::Clock { .. })));
    }

    #[test]
    fn widget_defaults_match_builtin_font() {
        let d = WidgetDefaults::default();
        assert_eq!(d.font, "Hermit");
        assert_eq!(d.fontsize, 12);
        assert_eq!(d.padding, 3);
    }
}
