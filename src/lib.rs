//! Segplot - plot 2D line segments in the terminal.
//!
//! Segplot reads a segment count followed by one `x1 y1 x2 y2` line per
//! segment, draws every segment on an auto-scaled terminal canvas, and can
//! report every point where two or more segments meet.
//!
//! # Features
//!
//! - Strict, line-numbered input parsing
//! - Braille-resolution terminal canvas with zoom and pan
//! - Bentley–Ottmann sweep-line intersection search
//! - SVG export
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use segplot::input::read_segments;
//! use segplot::intersect::{find_intersections, format_report, Algorithm};
//!
//! let segments = read_segments("2\n0 0 1 1\n1 1 2 0\n".as_bytes())?;
//! let found = find_intersections(&segments, Algorithm::Sweep);
//! assert_eq!(format_report(&found), "Intersection: 1.000000 1.000000\n");
//! # Ok::<(), segplot::SegplotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod error;
pub mod geometry;
pub mod input;
pub mod intersect;
pub mod plot;
pub mod ui;
pub mod util;

pub use error::{Result, SegplotError};
