//! Status bar UI component.

use super::formatters::{format_count, truncate_to_width};
use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Summary shown on the right of the status bar.
pub fn summary(app: &App) -> String {
    let intersections = match &app.intersections {
        Some(found) => format_count(found.len(), "intersection"),
        None => "intersections: -".to_string(),
    };
    format!(
        "{} | {} | {:.2}x | {}",
        format_count(app.segments.len(), "segment"),
        intersections,
        app.plot.zoom_level(),
        app.plot.palette.name()
    )
}

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let style = Style::default().fg(colors.status_fg).bg(colors.status_bg);
    let summary = summary(app);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(summary.len() as u16 + 1)])
        .split(area);

    let status = truncate_to_width(&app.status, chunks[0].width as usize);
    f.render_widget(Paragraph::new(status).style(style), chunks[0]);
    f.render_widget(
        Paragraph::new(summary)
            .style(style)
            .alignment(Alignment::Right),
        chunks[1],
    );
}
