//! Plot geometry: data bounds, the visible viewport and segment colors.
//!
//! The terminal view and the SVG export share this module so both render
//! the same region with the same colors.

mod colormaps;
pub mod svg;

pub use colormaps::{ColorPalette, Rgb};

use crate::geometry::{Point, Segment};
use crate::util::PlotLayoutConfig;

/// Axis-aligned plot region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

impl Bounds {
    /// Smallest region holding every finite endpoint.
    ///
    /// No finite endpoints gives the unit square. An axis with no extent is
    /// widened to one unit around its value.
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut points = segments
            .iter()
            .flat_map(|s| [s.start(), s.end()])
            .filter(|p| p.x.is_finite() && p.y.is_finite());

        let Some(first) = points.next() else {
            return Self::default();
        };

        let init = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        let tight = points.fold(init, |b, p| Self {
            x_min: b.x_min.min(p.x),
            x_max: b.x_max.max(p.x),
            y_min: b.y_min.min(p.y),
            y_max: b.y_max.max(p.y),
        });

        let (x_min, x_max) = widen(tight.x_min, tight.x_max);
        let (y_min, y_max) = widen(tight.y_min, tight.y_max);
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Width of the region.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the region.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Center of the region.
    pub fn center(&self) -> Point {
        Point::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// True if `p` lies inside or on the edge.
    pub fn contains(&self, p: Point) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Grow each side by `factor` of the region's size.
    pub fn padded(self, factor: f64) -> Self {
        let (dx, dy) = (self.width() * factor, self.height() * factor);
        Self {
            x_min: self.x_min - dx,
            x_max: self.x_max + dx,
            y_min: self.y_min - dy,
            y_max: self.y_max + dy,
        }
    }

    /// Scale around the center; `factor > 1` zooms in.
    pub fn zoomed(self, factor: f64) -> Self {
        let c = self.center();
        let (hw, hh) = (self.width() / 2.0 / factor, self.height() / 2.0 / factor);
        Self {
            x_min: c.x - hw,
            x_max: c.x + hw,
            y_min: c.y - hh,
            y_max: c.y + hh,
        }
    }

    /// Shift by fractions of the current width and height.
    pub fn panned(self, dx: f64, dy: f64) -> Self {
        let (dx, dy) = (self.width() * dx, self.height() * dy);
        Self {
            x_min: self.x_min + dx,
            x_max: self.x_max + dx,
            y_min: self.y_min + dy,
            y_max: self.y_max + dy,
        }
    }
}

fn widen(min: f64, max: f64) -> (f64, f64) {
    if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    }
}

/// Visible region and styling of the plot.
#[derive(Debug, Clone)]
pub struct PlotState {
    /// Region shown after a reset.
    pub home: Bounds,
    /// Region currently shown.
    pub view: Bounds,
    /// Segment color palette.
    pub palette: ColorPalette,
    /// Whether intersection markers are drawn.
    pub show_intersections: bool,
    config: PlotLayoutConfig,
}

impl PlotState {
    /// Create a plot state framing every segment.
    pub fn new(segments: &[Segment], config: PlotLayoutConfig) -> Self {
        let home = Bounds::from_segments(segments).padded(config.padding_factor);
        Self {
            home,
            view: home,
            palette: ColorPalette::default(),
            show_intersections: false,
            config,
        }
    }

    /// Magnification relative to the home view.
    pub fn zoom_level(&self) -> f64 {
        self.home.width() / self.view.width()
    }

    /// Zoom in one step.
    pub fn zoom_in(&mut self) {
        self.view = self.view.zoomed(self.config.zoom_step);
    }

    /// Zoom out one step.
    pub fn zoom_out(&mut self) {
        self.view = self.view.zoomed(1.0 / self.config.zoom_step);
    }

    /// Pan by whole steps; positive moves the view right and up.
    pub fn pan(&mut self, steps_x: i32, steps_y: i32) {
        let step = self.config.pan_step;
        self.view = self
            .view
            .panned(f64::from(steps_x) * step, f64::from(steps_y) * step);
    }

    /// Return to the home view.
    pub fn reset(&mut self) {
        self.view = self.home;
    }

    /// Switch to the next palette.
    pub fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_every_endpoint() {
        let b = Bounds::from_segments(&[
            Segment::new(0.0, 0.0, 1.0, 1.0),
            Segment::new(-2.0, 3.0, 2.0, -1.0),
        ]);
        assert_eq!(
            b,
            Bounds {
                x_min: -2.0,
                x_max: 2.0,
                y_min: -1.0,
                y_max: 3.0
            }
        );
    }

    #[test]
    fn empty_and_flat_inputs_get_a_usable_region() {
        assert_eq!(Bounds::from_segments(&[]), Bounds::default());

        let b = Bounds::from_segments(&[Segment::new(0.0, 2.0, 4.0, 2.0)]);
        assert_eq!((b.y_min, b.y_max), (1.5, 2.5));
        assert_eq!((b.x_min, b.x_max), (0.0, 4.0));
    }

    #[test]
    fn non_finite_endpoints_are_left_out() {
        let b = Bounds::from_segments(&[
            Segment::new(0.0, 0.0, f64::INFINITY, 1.0),
            Segment::new(2.0, f64::NAN, 3.0, 4.0),
        ]);
        assert_eq!(
            b,
            Bounds {
                x_min: 0.0,
                x_max: 3.0,
                y_min: 0.0,
                y_max: 4.0
            }
        );

        let only_nan = Bounds::from_segments(&[Segment::new(f64::NAN, 0.0, 1.0, f64::NAN)]);
        assert_eq!(only_nan, Bounds::default());
    }

    #[test]
    fn zoom_and_pan_keep_the_view_consistent() {
        let mut state = PlotState::new(
            &[Segment::new(0.0, 0.0, 10.0, 10.0)],
            PlotLayoutConfig {
                padding_factor: 0.0,
                zoom_step: 2.0,
                pan_step: 0.5,
            },
        );
        assert_eq!(state.zoom_level(), 1.0);

        state.zoom_in();
        assert_eq!(state.zoom_level(), 2.0);
        assert_eq!(state.view.center(), Point::new(5.0, 5.0));

        state.pan(1, -1);
        assert_eq!(state.view.center(), Point::new(7.5, 2.5));

        state.zoom_out();
        assert_eq!(state.zoom_level(), 1.0);

        state.reset();
        assert_eq!(state.view, state.home);
    }

    #[test]
    fn padding_grows_every_side() {
        let b = Bounds::default().padded(0.1);
        assert!(b.contains(Point::new(-0.05, 1.05)));
        assert!(!b.contains(Point::new(-0.2, 0.5)));
    }
}
