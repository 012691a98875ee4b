//! Accumulates per-line diagnostics without ever interrupting the batch.

use crate::models::parse_error::ParseError;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<ParseError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, error: ParseError) {
        debug!(line = error.line_number, reason = %error.reason, "skipping malformed line");
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}
