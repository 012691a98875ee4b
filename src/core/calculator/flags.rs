//! Late-entry / early-exit checks. Both comparisons are strict.

use crate::core::shift::ShiftPolicy;
use chrono::NaiveTime;

pub fn is_late_entry(first_punch: NaiveTime, policy: &ShiftPolicy) -> bool {
    first_punch > policy.late_entry_limit
}

pub fn is_early_exit(last_punch: NaiveTime, policy: &ShiftPolicy) -> bool {
    last_punch < policy.early_exit_limit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn late_entry_is_strictly_after_limit() {
        let p = ShiftPolicy::default();
        assert!(!is_late_entry(t(9, 30), &p));
        assert!(is_late_entry(t(9, 31), &p));
        assert!(is_late_entry(NaiveTime::from_hms_opt(9, 30, 1).unwrap(), &p));
        assert!(!is_late_entry(t(8, 55), &p));
    }

    #[test]
    fn early_exit_is_strictly_before_limit() {
        let p = ShiftPolicy::default();
        assert!(!is_early_exit(t(17, 0), &p));
        assert!(is_early_exit(t(16, 59), &p));
        assert!(!is_early_exit(t(18, 10), &p));
    }

    #[test]
    fn custom_policy_moves_thresholds() {
        let p = ShiftPolicy {
            late_entry_limit: t(10, 0),
            early_exit_limit: t(16, 0),
            ..ShiftPolicy::default()
        };
        assert!(!is_late_entry(t(9, 45), &p));
        assert!(!is_early_exit(t(16, 30), &p));
    }
}
