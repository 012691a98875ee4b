//! Lookup over a JSON summary written by `process`.

use crate::errors::{AppError, AppResult};
use crate::export::{SummaryDocument, SummaryExport};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub date: NaiveDate,
    pub row: SummaryExport,
}

pub struct SearchLogic;

impl SearchLogic {
    /// Load every row of a summary file. Keys that are not ISO dates are ignored.
    pub fn load(path: &Path) -> AppResult<Vec<SearchHit>> {
        if !path.is_file() {
            return Err(AppError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let doc: SummaryDocument = serde_json::from_str(&content)?;

        Ok(flatten(doc))
    }

    /// Keep rows matching `emp_code` exactly and/or `date`. No filter keeps all.
    pub fn search<'a>(
        hits: &'a [SearchHit],
        emp_code: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Vec<&'a SearchHit> {
        hits.iter()
            .filter(|h| emp_code.is_none_or(|code| h.row.emp_code == code))
            .filter(|h| date.is_none_or(|d| h.date == d))
            .collect()
    }

    pub fn describe(hit: &SearchHit) -> String {
        let r = &hit.row;
        format!(
            "Emp Code: {}, Date: {}, First Punch: {}, Last Punch: {}, Total Punches: {}, \
             Working Hours: {}, Late Entry: {}, Early Exit: {}, Shift: {}",
            r.emp_code,
            hit.date.format("%Y-%m-%d"),
            r.first_punch,
            r.last_punch,
            r.total_punches,
            r.working_hours,
            r.late_entry,
            r.early_exit,
            r.shift_period
        )
    }
}

fn flatten(doc: SummaryDocument) -> Vec<SearchHit> {
    doc.into_iter()
        .filter_map(|(key, rows)| {
            NaiveDate::parse_from_str(&key, "%Y-%m-%d")
                .ok()
                .map(|date| (date, rows))
        })
        .flat_map(|(date, rows)| rows.into_iter().map(move |row| SearchHit { date, row }))
        .collect()
}
