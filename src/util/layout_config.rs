//! Layout configuration constants for the plot view and the SVG export.

/// Configuration for the terminal plot view.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Margin added around the data on every side (0.05 = 5%).
    pub padding_factor: f64,
    /// Magnification applied by one zoom step.
    pub zoom_step: f64,
    /// Fraction of the view moved by one pan step.
    pub pan_step: f64,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            padding_factor: 0.05,
            zoom_step: 1.25,
            pan_step: 0.1,
        }
    }
}

/// Configuration for SVG export.
#[derive(Debug, Clone)]
pub struct SvgLayoutConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Blank border around the plot area in pixels.
    pub margin: u32,
    /// Segment stroke width in pixels.
    pub stroke_width: u32,
    /// Intersection marker radius in pixels.
    pub marker_radius: u32,
}

impl Default for SvgLayoutConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 20,
            stroke_width: 2,
            marker_radius: 4,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the terminal plot.
    pub plot: PlotLayoutConfig,
    /// Configuration for SVG export.
    pub svg: SvgLayoutConfig,
}
