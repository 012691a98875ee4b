use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Attendance of one employee on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub employee_code: String,
    pub date: NaiveDate,
    pub first_punch_time: NaiveTime,
    pub last_punch_time: NaiveTime,
    pub first_timestamp: i64,
    pub last_timestamp: i64,
    pub total_punches: usize,  // always >= 1
    pub working_hours: String, // "HH:MM"
    pub late_entry: bool,
    pub early_exit: bool,
    pub shift_period: String,
}

impl DailySummary {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn first_punch_str(&self) -> String {
        self.first_punch_time.format("%H:%M").to_string()
    }

    pub fn last_punch_str(&self) -> String {
        self.last_punch_time.format("%H:%M").to_string()
    }
}

/// Summaries keyed by date (ascending), each day sorted by employee code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryTable {
    days: BTreeMap<NaiveDate, Vec<DailySummary>>,
}

impl SummaryTable {
    /// Build a table from summaries in any order.
    pub fn from_summaries<I>(summaries: I) -> Self
    where
        I: IntoIterator<Item = DailySummary>,
    {
        let mut days: BTreeMap<NaiveDate, Vec<DailySummary>> = BTreeMap::new();
        for s in summaries {
            days.entry(s.date).or_default().push(s);
        }

        for rows in days.values_mut() {
            rows.sort_by(|a, b| a.employee_code.cmp(&b.employee_code));
        }

        Self { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of distinct dates.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of summary rows over all dates.
    pub fn record_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Iterate `(date, rows)` in date order.
    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &[DailySummary])> {
        self.days.iter().map(|(d, rows)| (d, rows.as_slice()))
    }

    /// All rows flattened, in table order.
    pub fn rows(&self) -> impl Iterator<Item = &DailySummary> {
        self.days.values().flatten()
    }
}
