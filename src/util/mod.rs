//! Utility functions.
//!
//! This module provides layout constants and clipboard helpers.

mod clipboard;
mod layout_config;

pub use clipboard::{copy_intersections, copy_segments, copy_to_clipboard};
pub use layout_config::{LayoutConfig, PlotLayoutConfig, SvgLayoutConfig};
