//! Drops punches repeated with the same (employee, datetime, device).
//!
//! Devices often flush the same punch twice. When that happens the record
//! seen LAST in input order is kept; the output lists keys in first-seen
//! order, so a fixed input always yields the same result.

use crate::models::punch::PunchRecord;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

type DedupKey = (String, DateTime<FixedOffset>, String);

fn key_of(rec: &PunchRecord) -> DedupKey {
    (
        rec.employee_code.clone(),
        rec.local_datetime,
        rec.device.clone(),
    )
}

pub fn remove_duplicates(records: Vec<PunchRecord>) -> Vec<PunchRecord> {
    let mut slots: HashMap<DedupKey, usize> = HashMap::with_capacity(records.len());
    let mut unique: Vec<PunchRecord> = Vec::with_capacity(records.len());

    for rec in records {
        match slots.entry(key_of(&rec)) {
            Entry::Occupied(slot) => unique[*slot.get()] = rec,
            Entry::Vacant(slot) => {
                slot.insert(unique.len());
                unique.push(rec);
            }
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timezone::{bangladesh_offset, to_local};

    fn punch(code: &str, ts: i64, device: &str, first_name: &str) -> PunchRecord {
        PunchRecord {
            employee_code: code.into(),
            first_name: first_name.into(),
            last_name: "Doe".into(),
            timestamp: ts,
            local_datetime: to_local(ts, bangladesh_offset()).unwrap(),
            device: device.into(),
        }
    }

    #[test]
    fn identical_triples_collapse_to_last_one() {
        let out = remove_duplicates(vec![
            punch("E1", 1_700_017_200, "Gate", "first"),
            punch("E2", 1_700_017_200, "Gate", "other"),
            punch("E1", 1_700_017_200, "Gate", "second"),
        ]);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].employee_code, "E1");
        assert_eq!(out[0].first_name, "second");
        assert_eq!(out[1].employee_code, "E2");
    }

    #[test]
    fn different_device_or_time_is_kept() {
        let out = remove_duplicates(vec![
            punch("E1", 1_700_017_200, "Gate", "a"),
            punch("E1", 1_700_017_200, "Back Door", "a"),
            punch("E1", 1_700_017_260, "Gate", "a"),
        ]);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn is_deterministic() {
        let input = vec![
            punch("E3", 1_700_017_200, "Gate", "x"),
            punch("E1", 1_700_017_200, "Gate", "y"),
            punch("E3", 1_700_017_200, "Gate", "z"),
        ];
        assert_eq!(remove_duplicates(input.clone()), remove_duplicates(input));
    }
}
