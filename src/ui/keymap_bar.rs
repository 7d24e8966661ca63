//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const KEYMAP: &str =
    "q:quit | +/-:zoom | hjkl:pan | 0:reset | i:intersections | c:palette | T:theme | y/Y:copy";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(KEYMAP).style(Style::default().fg(colors.keymap_fg).bg(colors.canvas_bg));

    f.render_widget(paragraph, area);
}
