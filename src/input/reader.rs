//! Line-oriented segment reader.

use std::io::BufRead;

use crate::error::{ParseErrorKind, Result, SegplotError};
use crate::geometry::Segment;

/// Reads a segment count followed by that many coordinate lines.
#[derive(Debug)]
pub struct SegmentReader<R> {
    reader: R,
    line_no: usize,
    buffer: String,
}

impl<R: BufRead> SegmentReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buffer: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Read the next raw line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<&str>> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        Ok(Some(self.buffer.as_str()))
    }

    /// Read and parse the count line.
    pub fn read_count(&mut self) -> Result<usize> {
        let line_no = self.line_no + 1;
        match self.next_line()? {
            Some(line) => parse_count(line, line_no),
            None => Err(SegplotError::parse(
                line_no,
                ParseErrorKind::InvalidCount(String::new()),
            )),
        }
    }

    /// Read exactly `count` coordinate lines.
    pub fn read_body(&mut self, count: usize) -> Result<Vec<Segment>> {
        // The count is untrusted; let the vector grow past this if it must.
        let mut segments = Vec::with_capacity(count.min(1024));

        while segments.len() < count {
            let line_no = self.line_no + 1;
            let Some(line) = self.next_line()? else {
                return Err(SegplotError::InputExhausted {
                    expected: count,
                    found: segments.len(),
                });
            };
            segments.push(parse_segment(line, line_no)?);
        }

        Ok(segments)
    }

    /// Read the count line and every coordinate line it announces.
    pub fn read_all(mut self) -> Result<Vec<Segment>> {
        let count = self.read_count()?;
        tracing::debug!(count, "Segment count read");
        let segments = self.read_body(count)?;
        tracing::debug!(lines = self.line_no, "Input parsed");
        Ok(segments)
    }
}

/// Parse the count line: a single non-negative integer.
pub fn parse_count(line: &str, line_no: usize) -> Result<usize> {
    let trimmed = line.trim();
    let mut tokens = trimmed.split_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token
            .parse::<usize>()
            .map_err(|_| SegplotError::parse(line_no, ParseErrorKind::InvalidCount(token.to_string()))),
        _ => Err(SegplotError::parse(
            line_no,
            ParseErrorKind::InvalidCount(trimmed.to_string()),
        )),
    }
}

/// Parse one coordinate line: exactly four numbers `x1 y1 x2 y2`.
pub fn parse_segment(line: &str, line_no: usize) -> Result<Segment> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(SegplotError::parse(
            line_no,
            ParseErrorKind::TokenCount(tokens.len()),
        ));
    }

    let mut coords = [0.0f64; 4];
    for (slot, token) in coords.iter_mut().zip(&tokens) {
        *slot = token.parse::<f64>().map_err(|_| {
            SegplotError::parse(line_no, ParseErrorKind::InvalidNumber(token.to_string()))
        })?;
    }

    let [x1, y1, x2, y2] = coords;
    Ok(Segment::new(x1, y1, x2, y2))
}
