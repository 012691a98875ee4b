use serde::Serialize;
use thiserror::Error;

/// Why a log line was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseErrorKind {
    #[error("Missing columns")]
    MissingColumns,

    #[error("Too many columns")]
    TooManyColumns,

    #[error("Missing or invalid timestamp")]
    MissingTimestamp,

    #[error("Invalid timestamp")]
    InvalidTimestamp,
}

/// Diagnostic for one rejected line. Created once, never modified.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Line {line_number}: {reason} → {}", .raw_line.trim())]
pub struct ParseError {
    pub line_number: usize,
    pub raw_line: String,
    pub reason: ParseErrorKind,
}

impl ParseError {
    pub fn new(line_number: usize, raw_line: &str, reason: ParseErrorKind) -> Self {
        Self {
            line_number,
            raw_line: raw_line.to_string(),
            reason,
        }
    }
}
