//! Gruvbox colors for the plot frame, markers and bars.

use crate::app::Theme;
use ratatui::style::Color;

// Gruvbox reference palette.
const DARK0: Color = Color::Rgb(40, 40, 40);
const DARK1: Color = Color::Rgb(60, 56, 54);
const DARK3: Color = Color::Rgb(102, 92, 84);
const GRAY_DARK: Color = Color::Rgb(168, 153, 132);
const GRAY_LIGHT: Color = Color::Rgb(124, 111, 100);
const LIGHT0: Color = Color::Rgb(251, 245, 234);
const LIGHT1: Color = Color::Rgb(235, 219, 178);
const LIGHT3: Color = Color::Rgb(213, 196, 161);
const ORANGE_BRIGHT: Color = Color::Rgb(251, 184, 108);
const ORANGE_FADED: Color = Color::Rgb(175, 58, 3);
const RED_BRIGHT: Color = Color::Rgb(251, 73, 52);
const RED_FADED: Color = Color::Rgb(157, 0, 6);
const GREEN_BRIGHT: Color = Color::Rgb(184, 187, 38);
const GREEN_FADED: Color = Color::Rgb(121, 116, 14);

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Canvas and bar background.
    pub canvas_bg: Color,
    /// Text drawn on an empty canvas.
    pub placeholder: Color,
    /// Plot title.
    pub title: Color,
    /// Visible range shown under the plot.
    pub range: Color,
    /// Plot border.
    pub frame: Color,
    /// Intersection markers.
    pub marker: Color,
    /// Status bar foreground.
    pub status_fg: Color,
    /// Status bar background.
    pub status_bg: Color,
    /// Key map bar foreground.
    pub keymap_fg: Color,
}

impl ThemeColors {
    /// Colors for `theme`.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                canvas_bg: DARK0,
                placeholder: LIGHT1,
                title: ORANGE_BRIGHT,
                range: GRAY_DARK,
                frame: DARK3,
                marker: RED_BRIGHT,
                status_fg: LIGHT1,
                status_bg: DARK1,
                keymap_fg: GREEN_BRIGHT,
            },
            Theme::GruvboxLight => Self {
                canvas_bg: LIGHT0,
                placeholder: DARK1,
                title: ORANGE_FADED,
                range: GRAY_LIGHT,
                frame: LIGHT3,
                marker: RED_FADED,
                status_fg: DARK1,
                status_bg: LIGHT1,
                keymap_fg: GREEN_FADED,
            },
        }
    }
}
