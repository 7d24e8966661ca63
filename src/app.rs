//! Application state and logic.

use crate::geometry::Segment;
use crate::intersect::{find_intersections, Algorithm, Intersection};
use crate::plot::PlotState;
use crate::ui::format_count;
use crate::util::{self, PlotLayoutConfig};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Segments in input order.
    pub segments: Vec<Segment>,
    /// Intersections, once computed.
    pub intersections: Option<Vec<Intersection>>,
    /// Search used when intersections are computed on demand.
    pub algorithm: Algorithm,
    /// Viewport and styling.
    pub plot: PlotState,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Where the segments came from, for the title.
    pub source_name: String,
}

impl App {
    /// Create a new application instance.
    pub fn new(
        segments: Vec<Segment>,
        algorithm: Algorithm,
        config: PlotLayoutConfig,
        source_name: impl Into<String>,
    ) -> Self {
        let plot = PlotState::new(&segments, config);
        let status = format!("{} loaded", format_count(segments.len(), "segment"));
        Self {
            segments,
            intersections: None,
            algorithm,
            plot,
            theme: Theme::GruvboxDark,
            status,
            source_name: source_name.into(),
        }
    }

    /// Use intersections computed up front and show their markers.
    pub fn with_intersections(mut self, intersections: Vec<Intersection>) -> Self {
        self.intersections = Some(intersections);
        self.plot.show_intersections = true;
        self
    }

    /// Intersections computed so far.
    pub fn intersections(&self) -> &[Intersection] {
        self.intersections.as_deref().unwrap_or_default()
    }

    /// Intersections, computing them on first use.
    fn ensure_intersections(&mut self) -> &[Intersection] {
        let segments = &self.segments;
        let algorithm = self.algorithm;
        self.intersections
            .get_or_insert_with(|| find_intersections(segments, algorithm))
    }

    /// Toggle intersection markers.
    pub fn toggle_intersections(&mut self) {
        if self.plot.show_intersections {
            self.plot.show_intersections = false;
            self.status = "Intersections: OFF".to_string();
            return;
        }

        let count = self.ensure_intersections().len();
        self.plot.show_intersections = true;
        self.status = format!("Intersections: ON ({} found)", count);
    }

    /// Zoom in.
    pub fn zoom_in(&mut self) {
        self.plot.zoom_in();
        self.status = format!("Zoom: {:.2}x", self.plot.zoom_level());
    }

    /// Zoom out.
    pub fn zoom_out(&mut self) {
        self.plot.zoom_out();
        self.status = format!("Zoom: {:.2}x", self.plot.zoom_level());
    }

    /// Pan the view; positive steps move right and up.
    pub fn pan(&mut self, steps_x: i32, steps_y: i32) {
        self.plot.pan(steps_x, steps_y);
    }

    /// Return to the initial view.
    pub fn reset_view(&mut self) {
        self.plot.reset();
        self.status = "View reset".to_string();
    }

    /// Cycle the segment color palette.
    pub fn cycle_palette(&mut self) {
        self.plot.cycle_palette();
        self.status = format!("Palette: {}", self.plot.palette.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the segment list to the clipboard.
    pub fn copy_segments(&mut self) {
        self.status = match util::copy_segments(&self.segments) {
            Ok(()) => format!("Copied {}!", format_count(self.segments.len(), "segment")),
            Err(e) => format!("Copy failed: {}", e),
        };
    }

    /// Copy the intersection report to the clipboard.
    pub fn copy_intersections(&mut self) {
        let result = util::copy_intersections(self.ensure_intersections());
        let count = self.intersections().len();
        self.status = match result {
            Ok(()) => format!("Copied {}!", format_count(count, "intersection")),
            Err(e) => format!("Copy failed: {}", e),
        };
    }
}
