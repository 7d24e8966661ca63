//! Plane geometry primitives.
//!
//! Points, segments and the orientation tests the intersection search is
//! built on. All comparisons that decide "same point" or "on the line" use a
//! single absolute tolerance, [`EPSILON`].

mod point;
mod segment;

pub use point::Point;
pub use segment::{orientation, Crossing, Orientation, Segment};

/// Absolute tolerance for coincidence tests.
pub const EPSILON: f64 = 1e-9;
