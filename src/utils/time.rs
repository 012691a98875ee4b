//! Time utilities: parsing HH:MM and formatting minutes.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// `"HH:MM"`, with a leading `-` for negative values.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(525), "08:45");
        assert_eq!(format_minutes(-61), "-01:01");
        assert_eq!(format_minutes(100 * 60), "100:00");
    }

    #[test]
    fn parses_clock_times() {
        assert_eq!(parse_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("noon"), None);
    }
}
