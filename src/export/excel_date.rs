// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// `YYYY-MM-DD` as an Excel day serial (1900 date system).
pub(crate) fn date_serial(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}

/// `HH:MM` as a fraction of a day.
pub(crate) fn time_serial(s: &str) -> Option<f64> {
    let t = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
    Some(t.num_seconds_from_midnight() as f64 / 86400.0)
}
