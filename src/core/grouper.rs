//! Buckets punches by (employee code, local calendar date).

use crate::models::punch::PunchRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub type GroupKey = (String, NaiveDate);

/// Each bucket keeps the input order of its records.
pub fn group_by_employee_and_date(records: Vec<PunchRecord>) -> BTreeMap<GroupKey, Vec<PunchRecord>> {
    let mut groups: BTreeMap<GroupKey, Vec<PunchRecord>> = BTreeMap::new();

    for rec in records {
        groups
            .entry((rec.employee_code.clone(), rec.date()))
            .or_default()
            .push(rec);
    }

    groups
}
