//! Epoch seconds → fixed-offset local datetime.
//!
//! Only fixed offsets are used; no named zones and no DST rules, so a given
//! timestamp renders identically on every machine.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Bangladesh Standard Time, UTC+6.
pub const BANGLADESH_OFFSET_SECS: i32 = 6 * 3600;

pub fn bangladesh_offset() -> FixedOffset {
    FixedOffset::east_opt(BANGLADESH_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}

pub fn to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

/// Convert a Unix timestamp to `offset`. `None` when out of chrono's range.
pub fn to_local(ts: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    to_utc(ts).map(|utc| utc.with_timezone(&offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_bangladesh_time() {
        let dt = to_local(1_758_786_340, bangladesh_offset()).unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-09-25 13:45:40");
        assert_eq!(dt.offset().local_minus_utc(), 6 * 3600);
    }

    #[test]
    fn utc_and_local_are_the_same_instant() {
        let utc = to_utc(1_700_000_000).unwrap();
        let local = to_local(1_700_000_000, bangladesh_offset()).unwrap();
        assert_eq!(utc.format("%H:%M").to_string(), "22:13");
        assert_eq!(local.format("%Y-%m-%d %H:%M").to_string(), "2023-11-15 04:13");
        assert_eq!(utc, local);
    }

    #[test]
    fn out_of_range_timestamp_is_none() {
        assert!(to_local(i64::MAX, bangladesh_offset()).is_none());
    }

    #[test]
    fn offset_from_minutes_rejects_full_day() {
        assert!(offset_from_minutes(360).is_some());
        assert!(offset_from_minutes(24 * 60).is_none());
    }
}
