//! Error types for segplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for segplot operations.
pub type Result<T> = std::result::Result<T, SegplotError>;

/// What went wrong while parsing one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// The first line is missing or is not a non-negative integer.
    InvalidCount(String),
    /// A coordinate line did not hold exactly four tokens.
    TokenCount(usize),
    /// A token could not be parsed as a floating-point number.
    InvalidNumber(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCount(token) if token.is_empty() => {
                write!(f, "missing segment count")
            },
            Self::InvalidCount(token) => {
                write!(f, "segment count '{}' is not a non-negative integer", token)
            },
            Self::TokenCount(found) => {
                write!(f, "expected 4 coordinates (x1 y1 x2 y2), found {}", found)
            },
            Self::InvalidNumber(token) => write!(f, "'{}' is not a valid number", token),
        }
    }
}

/// Errors that can occur in segplot.
#[derive(Debug, Error)]
pub enum SegplotError {
    /// A line of input could not be parsed.
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        /// One-based input line number.
        line: usize,
        /// What was wrong with the line.
        kind: ParseErrorKind,
    },

    /// Input ended before all declared segments were read.
    #[error("Input exhausted: expected {expected} segment lines, found {found}")]
    InputExhausted {
        /// Segment lines announced by the count line.
        expected: usize,
        /// Segment lines actually read.
        found: usize,
    },

    /// Failed to open an input file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the SVG export.
    #[error("Export error: {0}")]
    Export(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl SegplotError {
    /// Create a Parse error.
    pub fn parse(line: usize, kind: ParseErrorKind) -> Self {
        Self::Parse { line, kind }
    }

    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an Export error.
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export(message.into())
    }

    /// True for the errors caused by malformed input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::InputExhausted { .. })
    }
}
