//! Working duration between the first and the last punch of a day.

use crate::utils::time::format_minutes;
use chrono::{DateTime, FixedOffset};

/// `"HH:MM"` between `first` and `last`, never negative.
/// A day with a single punch has no measurable duration: `"00:00"`.
pub fn calculate_working_hours(
    first: &DateTime<FixedOffset>,
    last: &DateTime<FixedOffset>,
    total_punches: usize,
) -> String {
    if total_punches <= 1 {
        return format_minutes(0);
    }

    let seconds = (*last - *first).num_seconds().max(0);
    format_minutes(seconds / 60)
}
