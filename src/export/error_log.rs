// src/export/error_log.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::parse_error::ParseError;
use std::fs;
use std::path::Path;

/// Render diagnostics one per line: `Line N: <reason> → <raw line>`.
pub fn render_error_log(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the error log. Callers skip this when there are no errors.
pub(crate) fn export_error_log(errors: &[ParseError], path: &Path) -> AppResult<()> {
    fs::write(path, render_error_log(errors))?;
    notify_export_success("Error log", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_error::ParseErrorKind;

    #[test]
    fn one_line_per_error_in_order() {
        let errors = vec![
            ParseError::new(2, "E002 OnlyThreeTokens  ", ParseErrorKind::MissingColumns),
            ParseError::new(5, "E9 a b c d e f", ParseErrorKind::TooManyColumns),
        ];

        assert_eq!(
            render_error_log(&errors),
            "Line 2: Missing columns → E002 OnlyThreeTokens\nLine 5: Too many columns → E9 a b c d e f"
        );
    }
}
