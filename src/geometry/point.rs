//! Points in the plane.

use std::cmp::Ordering;
use std::fmt;

use super::EPSILON;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True if both coordinates agree within [`EPSILON`].
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() <= EPSILON && (self.y - other.y).abs() <= EPSILON
    }

    /// Order in which a top-to-bottom sweep line meets points.
    ///
    /// Higher y comes first; on the same y, lower x comes first.
    pub fn sweep_cmp(&self, other: &Self) -> Ordering {
        other
            .y
            .total_cmp(&self.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }

    /// True if a sweep at `current` has not reached this point yet.
    ///
    /// Points on the sweep line count only when strictly to the right.
    pub fn is_after(self, current: Self) -> bool {
        self.y < current.y - EPSILON
            || ((self.y - current.y).abs() <= EPSILON && self.x > current.x + EPSILON)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding 0.0 folds -0.0 into 0.0 so output never shows "-0.000000".
        write!(f, "{:.6} {:.6}", self.x + 0.0, self.y + 0.0)
    }
}
