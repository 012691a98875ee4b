use chrono::NaiveTime;

/// Shift rules used by the daily summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftPolicy {
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
    pub late_entry_limit: NaiveTime,
    pub early_exit_limit: NaiveTime,
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            shift_start: hm(9, 0),
            shift_end: hm(18, 0),
            late_entry_limit: hm(9, 30),
            early_exit_limit: hm(17, 0),
        }
    }
}

impl ShiftPolicy {
    /// Display label for the nominal working window, e.g. `09:00 - 18:00`.
    pub fn shift_period(&self) -> String {
        format!(
            "{} - {}",
            self.shift_start.format("%H:%M"),
            self.shift_end.format("%H:%M")
        )
    }
}
