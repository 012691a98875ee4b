//! Parse → dedup → group → summarize, in one pass over a punch log.
//!
//! Nothing in here returns an error: malformed lines become `ParseError`
//! values and a missing/unreadable file becomes the report's `diagnostic`.

use crate::core::collector::ErrorCollector;
use crate::core::dedup::remove_duplicates;
use crate::core::grouper::group_by_employee_and_date;
use crate::core::parser::{LineParser, NameLayout, ParserOptions};
use crate::core::shift::ShiftPolicy;
use crate::core::summarizer::build_summary_table;
use crate::core::timezone::bangladesh_offset;
use crate::errors::AppError;
use crate::models::daily_summary::SummaryTable;
use crate::models::flag_encoding::FlagEncoding;
use crate::models::parse_error::ParseError;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Every knob the original script variants differed on.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub parser: ParserOptions,
    pub timestamp_min_digits: usize,
    pub shift: ShiftPolicy,
    pub flag_encoding: FlagEncoding,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parser: ParserOptions {
                min_columns: 4,
                max_columns: 6,
                name_layout: NameLayout::Fixed,
                offset: bangladesh_offset(),
            },
            timestamp_min_digits: 7,
            shift: ShiftPolicy::default(),
            flag_encoding: FlagEncoding::Bool,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub parsed: usize,
    pub duplicates_removed: usize,
    pub rejected: usize,
}

impl PipelineStats {
    /// Records left after deduplication.
    pub fn unique_punches(&self) -> usize {
        self.parsed - self.duplicates_removed
    }
}

#[derive(Debug, Default)]
pub struct AttendanceReport {
    pub table: SummaryTable,
    pub errors: Vec<ParseError>,
    pub stats: PipelineStats,
    /// Top-level precondition failure (never a per-line problem).
    pub diagnostic: Option<AppError>,
}

impl AttendanceReport {
    fn failed(diagnostic: AppError) -> Self {
        Self {
            diagnostic: Some(diagnostic),
            ..Self::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.diagnostic.is_none()
    }
}

pub struct Pipeline {
    config: PipelineConfig,
    parser: LineParser,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            parser: LineParser::new(config.parser, config.timestamp_min_digits),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run over in-memory lines. Line numbers are 1-based positions in `lines`.
    pub fn process_lines<'a, I>(&self, lines: I) -> AttendanceReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut stats = PipelineStats::default();
        let mut collector = ErrorCollector::new();
        let mut records = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            stats.lines_read += 1;

            if line.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            match self.parser.parse_line(idx + 1, line) {
                Ok(rec) => records.push(rec),
                Err(e) => collector.record(e),
            }
        }

        stats.parsed = records.len();
        stats.rejected = collector.len();

        let unique = remove_duplicates(records);
        stats.duplicates_removed = stats.parsed - unique.len();

        let groups = group_by_employee_and_date(unique);
        let table = build_summary_table(groups, &self.config.shift);

        info!(
            lines = stats.lines_read,
            parsed = stats.parsed,
            duplicates = stats.duplicates_removed,
            rejected = stats.rejected,
            days = table.day_count(),
            "punch log processed"
        );

        AttendanceReport {
            table,
            errors: collector.into_errors(),
            stats,
            diagnostic: None,
        }
    }

    /// Run over a file. Invalid UTF-8 is replaced rather than rejected.
    pub fn process_file(&self, path: &Path) -> AttendanceReport {
        if !path.is_file() {
            warn!(path = %path.display(), "punch log not found");
            return AttendanceReport::failed(AppError::FileNotFound(path.display().to_string()));
        }

        // the handle is closed when `fs::read` returns, on success or failure
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "punch log unreadable");
                return AttendanceReport::failed(AppError::Io(e));
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        self.process_lines(content.lines())
    }
}
