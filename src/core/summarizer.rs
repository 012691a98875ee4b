//! Reduces each (employee, date) bucket to a `DailySummary`.

use crate::core::calculator::flags::{is_early_exit, is_late_entry};
use crate::core::calculator::working_hours::calculate_working_hours;
use crate::core::grouper::GroupKey;
use crate::core::shift::ShiftPolicy;
use crate::models::daily_summary::{DailySummary, SummaryTable};
use crate::models::punch::PunchRecord;
use std::collections::BTreeMap;

/// Summarize one bucket. Returns `None` for an empty bucket, which the
/// grouper never produces.
pub fn summarize_day(
    key: &GroupKey,
    mut punches: Vec<PunchRecord>,
    policy: &ShiftPolicy,
) -> Option<DailySummary> {
    // stable: equal instants keep their input order
    punches.sort_by_key(|p| p.local_datetime);

    let first = punches.first()?;
    let last = punches.last()?;
    let total_punches = punches.len();

    Some(DailySummary {
        employee_code: key.0.clone(),
        date: key.1,
        first_punch_time: first.time(),
        last_punch_time: last.time(),
        first_timestamp: first.timestamp,
        last_timestamp: last.timestamp,
        total_punches,
        working_hours: calculate_working_hours(
            &first.local_datetime,
            &last.local_datetime,
            total_punches,
        ),
        late_entry: is_late_entry(first.time(), policy),
        early_exit: is_early_exit(last.time(), policy),
        shift_period: policy.shift_period(),
    })
}

pub fn build_summary_table(
    groups: BTreeMap<GroupKey, Vec<PunchRecord>>,
    policy: &ShiftPolicy,
) -> SummaryTable {
    SummaryTable::from_summaries(
        groups
            .into_iter()
            .filter_map(|(key, punches)| summarize_day(&key, punches, policy)),
    )
}
