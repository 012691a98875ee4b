// src/export/model.rs

use crate::models::daily_summary::{DailySummary, SummaryTable};
use crate::models::flag_encoding::{FlagEncoding, FlagValue};
use crate::export::excel_date::{date_serial, time_serial};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// One row of the JSON summary, nested under its ISO date.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    pub emp_code: String,
    pub first_punch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_ts: Option<i64>,
    pub last_punch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ts: Option<i64>,
    pub total_punches: usize,
    pub working_hours: String,
    pub late_entry: FlagValue,
    pub early_exit: FlagValue,
    #[serde(default)]
    pub shift_period: String,
}

/// Date (`YYYY-MM-DD`) → rows, the layout of the JSON summary file.
pub type SummaryDocument = BTreeMap<String, Vec<SummaryExport>>;

/// Flat row for CSV / XLSX.
#[derive(Serialize, Clone, Debug)]
pub struct SheetRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Emp Code")]
    pub emp_code: String,
    #[serde(rename = "First Punch")]
    pub first_punch: String,
    #[serde(rename = "Last Punch")]
    pub last_punch: String,
    #[serde(rename = "Total Punches")]
    pub total_punches: usize,
    #[serde(rename = "Working Hours")]
    pub working_hours: String,
    #[serde(rename = "Late Entry")]
    pub late_entry: String,
    #[serde(rename = "Early Exit")]
    pub early_exit: String,
}

/// Header per CSV / XLSX (same order as `SheetRow`).
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Emp Code",
        "First Punch",
        "Last Punch",
        "Total Punches",
        "Working Hours",
        "Late Entry",
        "Early Exit",
    ]
}

pub(crate) fn summary_to_export(s: &DailySummary, enc: FlagEncoding) -> SummaryExport {
    SummaryExport {
        emp_code: s.employee_code.clone(),
        first_punch: s.first_punch_str(),
        first_ts: Some(s.first_timestamp),
        last_punch: s.last_punch_str(),
        last_ts: Some(s.last_timestamp),
        total_punches: s.total_punches,
        working_hours: s.working_hours.clone(),
        late_entry: enc.encode(s.late_entry),
        early_exit: enc.encode(s.early_exit),
        shift_period: s.shift_period.clone(),
    }
}

pub(crate) fn table_to_document(table: &SummaryTable, enc: FlagEncoding) -> SummaryDocument {
    table
        .days()
        .map(|(date, rows)| {
            (
                date.format("%Y-%m-%d").to_string(),
                rows.iter().map(|s| summary_to_export(s, enc)).collect(),
            )
        })
        .collect()
}

pub(crate) fn table_to_sheet_rows(table: &SummaryTable, enc: FlagEncoding) -> Vec<SheetRow> {
    table
        .rows()
        .map(|s| SheetRow {
            date: s.date_str(),
            emp_code: s.employee_code.clone(),
            first_punch: s.first_punch_str(),
            last_punch: s.last_punch_str(),
            total_punches: s.total_punches,
            working_hours: s.working_hours.clone(),
            late_entry: enc.encode(s.late_entry).to_string(),
            early_exit: enc.encode(s.early_exit).to_string(),
        })
        .collect()
}

/// A typed spreadsheet cell. Only the punch count is numeric; codes and
/// flags stay text so values like `00123` are kept as logged.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SheetCell {
    Text(String),
    Date { serial: f64, shown: String },
    Time { serial: f64, shown: String },
    Count(usize),
}

impl SheetCell {
    /// Width of the value as displayed, for column sizing.
    pub(crate) fn display_width(&self) -> usize {
        match self {
            SheetCell::Text(s) | SheetCell::Date { shown: s, .. } | SheetCell::Time { shown: s, .. } => {
                UnicodeWidthStr::width(s.as_str())
            }
            SheetCell::Count(n) => n.to_string().len(),
        }
    }
}

fn date_cell(s: &str) -> SheetCell {
    match date_serial(s) {
        Some(serial) => SheetCell::Date {
            serial,
            shown: s.to_string(),
        },
        None => SheetCell::Text(s.to_string()),
    }
}

fn time_cell(s: &str) -> SheetCell {
    match time_serial(s) {
        Some(serial) => SheetCell::Time {
            serial,
            shown: s.to_string(),
        },
        None => SheetCell::Text(s.to_string()),
    }
}

/// Cells of one sheet row, in `get_headers()` order.
pub(crate) fn sheet_row_cells(r: &SheetRow) -> Vec<SheetCell> {
    vec![
        date_cell(&r.date),
        SheetCell::Text(r.emp_code.clone()),
        time_cell(&r.first_punch),
        time_cell(&r.last_punch),
        SheetCell::Count(r.total_punches),
        // a duration, not a clock time
        SheetCell::Text(r.working_hours.clone()),
        SheetCell::Text(r.late_entry.clone()),
        SheetCell::Text(r.early_exit.clone()),
    ]
}
