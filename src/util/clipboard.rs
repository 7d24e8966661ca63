//! Clipboard integration.

use crate::error::Result;
use crate::geometry::Segment;
use crate::input::format_segments;
use crate::intersect::{format_report, Intersection};
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy the segment list, in input format, to clipboard.
pub fn copy_segments(segments: &[Segment]) -> Result<()> {
    copy_to_clipboard(&format_segments(segments))
}

/// Copy the intersection report to clipboard.
pub fn copy_intersections(intersections: &[Intersection]) -> Result<()> {
    copy_to_clipboard(&format_report(intersections))
}
