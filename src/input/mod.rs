//! Reading segments from text.
//!
//! The format is a count line followed by one `x1 y1 x2 y2` line per
//! segment. Any text after the last announced segment is ignored.

mod reader;

pub use reader::{parse_count, parse_segment, SegmentReader};

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SegplotError};
use crate::geometry::Segment;

/// Read a complete segment list from a buffered reader.
pub fn read_segments<R: BufRead>(reader: R) -> Result<Vec<Segment>> {
    SegmentReader::new(reader).read_all()
}

/// Read a complete segment list from a file.
pub fn read_segments_from_path(path: &Path) -> Result<Vec<Segment>> {
    let file = File::open(path).map_err(|e| SegplotError::file_open(path.to_path_buf(), e))?;
    read_segments(BufReader::new(file))
}

/// Render segments back into the input format.
pub fn format_segments(segments: &[Segment]) -> String {
    let mut text = format!("{}\n", segments.len());
    for s in segments {
        let _ = writeln!(text, "{} {} {} {}", s.x1, s.y1, s.x2, s.y2);
    }
    text
}
