//! Plot canvas - draws segments and intersection markers.

use super::formatters::{format_axis_label, format_count};
use super::ThemeColors;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};

/// One canvas line per finite segment, in input order, with no transformation applied.
pub fn segment_lines(app: &App) -> Vec<CanvasLine> {
    let count = app.segments.len();
    app.segments
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_finite())
        .map(|(i, s)| CanvasLine {
            x1: s.x1,
            y1: s.y1,
            x2: s.x2,
            y2: s.y2,
            color: app.plot.palette.segment_color(i, count).into(),
        })
        .collect()
}

/// Intersection marker coordinates, empty while markers are hidden.
pub fn marker_points(app: &App) -> Vec<(f64, f64)> {
    if !app.plot.show_intersections {
        return Vec::new();
    }
    app.intersections()
        .iter()
        .map(|i| (i.point.x, i.point.y))
        .collect()
}

/// Draw the plot into `area`.
pub(super) fn draw_plot(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let view = app.plot.view;
    let lines = segment_lines(app);
    let markers = marker_points(app);

    let title = format!(
        " {} - {} ",
        app.source_name,
        format_count(app.segments.len(), "segment")
    );
    let range = format!(
        " x: [{}, {}]  y: [{}, {}] ",
        format_axis_label(view.x_min),
        format_axis_label(view.x_max),
        format_axis_label(view.y_min),
        format_axis_label(view.y_max)
    );

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.title))
        .title_bottom(Line::styled(range, Style::default().fg(colors.range)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.frame))
        .style(Style::default().bg(colors.canvas_bg));

    let center = view.center();
    let marker_color = colors.marker;
    let empty_style = Style::default().fg(colors.placeholder);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(colors.canvas_bg)
        .x_bounds([view.x_min, view.x_max])
        .y_bounds([view.y_min, view.y_max])
        .paint(|ctx| {
            for line in &lines {
                ctx.draw(line);
            }

            if !markers.is_empty() {
                ctx.layer();
                ctx.draw(&Points {
                    coords: &markers,
                    color: marker_color,
                });
            }

            if lines.is_empty() {
                ctx.print(center.x, center.y, Span::styled("No segments", empty_style));
            }
        });

    f.render_widget(canvas, area);
}
