//! Line parser: one raw log line → `PunchRecord` or `ParseError`.
//!
//! Expected layout: `<code> <first> <last> <unix_ts> <device...>`.
//! The timestamp column is not fixed; it is located by a `TimestampLocator`.

use crate::core::timezone::to_local;
use crate::models::parse_error::{ParseError, ParseErrorKind};
use crate::models::punch::PunchRecord;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Finds the index of the timestamp token in a split line.
pub trait TimestampLocator {
    fn locate(&self, tokens: &[&str]) -> Option<usize>;
}

/// First token made only of ASCII digits and at least `min_digits` long.
///
/// Short numeric fragments (badge suffixes, "2" in a name) are skipped, but a
/// long numeric employee code will still be mistaken for the timestamp.
#[derive(Debug, Clone, Copy)]
pub struct DigitRunLocator {
    pub min_digits: usize,
}

impl Default for DigitRunLocator {
    fn default() -> Self {
        Self { min_digits: 7 }
    }
}

impl TimestampLocator for DigitRunLocator {
    fn locate(&self, tokens: &[&str]) -> Option<usize> {
        tokens.iter().position(|t| {
            t.len() >= self.min_digits && t.chars().all(|c| c.is_ascii_digit())
        })
    }
}

/// Where first/last names are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameLayout {
    /// tokens[1] and tokens[2], whatever they are.
    #[default]
    Fixed,
    /// Every token between the code and the timestamp.
    Joined,
}

#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    pub min_columns: usize,
    pub max_columns: usize,
    pub name_layout: NameLayout,
    pub offset: FixedOffset,
}

pub struct LineParser<L: TimestampLocator = DigitRunLocator> {
    options: ParserOptions,
    locator: L,
}

impl LineParser<DigitRunLocator> {
    pub fn new(options: ParserOptions, min_digits: usize) -> Self {
        Self::with_locator(options, DigitRunLocator { min_digits })
    }
}

impl<L: TimestampLocator> LineParser<L> {
    pub fn with_locator(options: ParserOptions, locator: L) -> Self {
        Self { options, locator }
    }

    /// Parse one line. `line_number` is 1-based and only used for diagnostics.
    pub fn parse_line(&self, line_number: usize, line: &str) -> Result<PunchRecord, ParseError> {
        let fail = |reason| ParseError::new(line_number, line, reason);

        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() < self.options.min_columns {
            return Err(fail(ParseErrorKind::MissingColumns));
        }
        if tokens.len() > self.options.max_columns {
            return Err(fail(ParseErrorKind::TooManyColumns));
        }

        let ts_index = self
            .locator
            .locate(&tokens)
            .ok_or_else(|| fail(ParseErrorKind::MissingTimestamp))?;

        let timestamp: i64 = tokens[ts_index]
            .parse()
            .map_err(|_| fail(ParseErrorKind::InvalidTimestamp))?;

        let local_datetime = to_local(timestamp, self.options.offset)
            .ok_or_else(|| fail(ParseErrorKind::InvalidTimestamp))?;

        let (first_name, last_name) = self.names(&tokens, ts_index);

        Ok(PunchRecord {
            employee_code: tokens[0].to_string(),
            first_name,
            last_name,
            timestamp,
            local_datetime,
            device: tokens[ts_index + 1..].join(" "),
        })
    }

    fn names(&self, tokens: &[&str], ts_index: usize) -> (String, String) {
        match self.options.name_layout {
            NameLayout::Fixed => (
                tokens.get(1).copied().unwrap_or_default().to_string(),
                tokens.get(2).copied().unwrap_or_default().to_string(),
            ),
            NameLayout::Joined => {
                let between: &[&str] = if ts_index > 1 { &tokens[1..ts_index] } else { &[] };
                match between.split_first() {
                    Some((first, rest)) => (first.to_string(), rest.join(" ")),
                    None => (String::new(), String::new()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timezone::bangladesh_offset;

    fn options(layout: NameLayout) -> ParserOptions {
        ParserOptions {
            min_columns: 4,
            max_columns: 6,
            name_layout: layout,
            offset: bangladesh_offset(),
        }
    }

    fn parser() -> LineParser {
        LineParser::new(options(NameLayout::Fixed), 7)
    }

    #[test]
    fn parses_well_formed_line() {
        let rec = parser()
            .parse_line(1, "E001 John Doe 1700000000 DeviceA")
            .unwrap();

        assert_eq!(rec.employee_code, "E001");
        assert_eq!(rec.first_name, "John");
        assert_eq!(rec.last_name, "Doe");
        assert_eq!(rec.timestamp, 1_700_000_000);
        assert_eq!(rec.device, "DeviceA");
        assert_eq!(rec.date_str(), "2023-11-15");
        assert_eq!(rec.time_str(), "04:13");
    }

    #[test]
    fn device_keeps_inner_spaces() {
        let rec = parser()
            .parse_line(1, "E001 John Doe 1700000000 Main   Gate")
            .unwrap();
        assert_eq!(rec.device, "Main Gate");
    }

    #[test]
    fn device_may_be_empty() {
        let rec = parser().parse_line(3, "E001 John Doe 1700000000").unwrap();
        assert_eq!(rec.device, "");
    }

    #[test]
    fn too_few_tokens_is_missing_columns() {
        let err = parser().parse_line(7, "E002 OnlyThreeTokens").unwrap_err();
        assert_eq!(err.reason, ParseErrorKind::MissingColumns);
        assert_eq!(err.line_number, 7);
        assert_eq!(err.raw_line, "E002 OnlyThreeTokens");
    }

    #[test]
    fn too_many_tokens_wins_over_missing_timestamp() {
        let err = parser().parse_line(1, "E1 a b c d e f").unwrap_err();
        assert_eq!(err.reason, ParseErrorKind::TooManyColumns);
    }

    #[test]
    fn short_numbers_are_not_timestamps() {
        let err = parser().parse_line(1, "E1 John 2 123456 Gate").unwrap_err();
        assert_eq!(err.reason, ParseErrorKind::MissingTimestamp);
    }

    #[test]
    fn overflowing_timestamp_is_invalid() {
        let err = parser()
            .parse_line(1, "E1 John Doe 99999999999999999999999 Gate")
            .unwrap_err();
        assert_eq!(err.reason, ParseErrorKind::InvalidTimestamp);
    }

    #[test]
    fn timestamp_outside_calendar_range_is_invalid() {
        let err = parser()
            .parse_line(1, "E1 John Doe 9223372036854775807 Gate")
            .unwrap_err();
        assert_eq!(err.reason, ParseErrorKind::InvalidTimestamp);
    }

    #[test]
    fn fixed_layout_takes_tokens_one_and_two() {
        let rec = parser().parse_line(1, "E1 Cher 1700000000 Gate").unwrap();
        assert_eq!(rec.first_name, "Cher");
        assert_eq!(rec.last_name, "1700000000");
        assert_eq!(rec.device, "Gate");
    }

    #[test]
    fn joined_layout_collects_names_before_timestamp() {
        let p = LineParser::new(options(NameLayout::Joined), 7);

        let rec = p.parse_line(1, "E1 Mary Ann Smith 1700000000 Gate").unwrap();
        assert_eq!(rec.first_name, "Mary");
        assert_eq!(rec.last_name, "Ann Smith");

        let rec = p.parse_line(1, "E1 Cher 1700000000 Gate").unwrap();
        assert_eq!(rec.first_name, "Cher");
        assert_eq!(rec.last_name, "");
    }

    #[test]
    fn custom_locator_can_replace_heuristic() {
        struct FourthColumn;
        impl TimestampLocator for FourthColumn {
            fn locate(&self, tokens: &[&str]) -> Option<usize> {
                (tokens.len() > 3).then_some(3)
            }
        }

        let p = LineParser::with_locator(options(NameLayout::Fixed), FourthColumn);
        let rec = p.parse_line(1, "1234567890 John Doe 1700000000 Gate").unwrap();
        assert_eq!(rec.employee_code, "1234567890");
        assert_eq!(rec.timestamp, 1_700_000_000);

        // the digit-run heuristic picks the employee code instead
        let rec = parser()
            .parse_line(1, "1234567890 John Doe 1700000000 Gate")
            .unwrap();
        assert_eq!(rec.timestamp, 1_234_567_890);
    }
}
