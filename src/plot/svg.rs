//! SVG export of the plot.

use std::path::Path;

use plotters::prelude::*;

use super::{Bounds, ColorPalette, Rgb};
use crate::error::{Result, SegplotError};
use crate::geometry::Segment;
use crate::intersect::Intersection;
use crate::util::SvgLayoutConfig;

fn export_error(err: impl std::fmt::Display) -> SegplotError {
    SegplotError::export(err.to_string())
}

/// Write `segments`, and a marker at each intersection, to an SVG file.
pub fn export(
    path: &Path,
    segments: &[Segment],
    intersections: &[Intersection],
    bounds: &Bounds,
    palette: ColorPalette,
    config: &SvgLayoutConfig,
) -> Result<()> {
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(export_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(config.margin as i32)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
        .map_err(export_error)?;

    let drawable = segments.iter().enumerate().filter(|(_, s)| s.is_finite());
    chart
        .draw_series(drawable.map(|(i, s)| {
            let Rgb(r, g, b) = palette.segment_color(i, segments.len());
            PathElement::new(
                vec![(s.x1, s.y1), (s.x2, s.y2)],
                RGBColor(r, g, b).stroke_width(config.stroke_width),
            )
        }))
        .map_err(export_error)?;

    chart
        .draw_series(intersections.iter().map(|i| {
            Circle::new(
                (i.point.x, i.point.y),
                config.marker_radius as i32,
                BLACK.filled(),
            )
        }))
        .map_err(export_error)?;

    root.present().map_err(export_error)?;

    tracing::info!(
        path = %path.display(),
        segments = segments.len(),
        markers = intersections.len(),
        "SVG written"
    );
    Ok(())
}
