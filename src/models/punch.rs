use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::Serialize;

/// A single clock-in/clock-out event read from a device log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PunchRecord {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub timestamp: i64,                        // Unix epoch seconds, as logged
    pub local_datetime: DateTime<FixedOffset>, // timestamp in the configured offset
    pub device: String,                        // may contain spaces, may be empty
}

impl PunchRecord {
    /// Calendar date in the configured offset.
    pub fn date(&self) -> NaiveDate {
        self.local_datetime.date_naive()
    }

    /// Local time-of-day.
    pub fn time(&self) -> NaiveTime {
        self.local_datetime.time()
    }

    pub fn date_str(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.local_datetime.format("%H:%M").to_string()
    }
}
