//! Aggregate numbers printed after a run.

use crate::core::pipeline::AttendanceReport;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    pub employees: usize,
    pub days: usize,
    pub records: usize,
    pub late_entries: usize,
    pub early_exits: usize,
    pub duplicates_removed: usize,
    pub errors: usize,
}

impl ProcessingStats {
    pub fn from_report(report: &AttendanceReport) -> Self {
        let table = &report.table;

        let employees: BTreeSet<&str> = table.rows().map(|r| r.employee_code.as_str()).collect();

        Self {
            employees: employees.len(),
            days: table.day_count(),
            records: table.record_count(),
            late_entries: table.rows().filter(|r| r.late_entry).count(),
            early_exits: table.rows().filter(|r| r.early_exit).count(),
            duplicates_removed: report.stats.duplicates_removed,
            errors: report.errors.len(),
        }
    }

    pub fn render(&self) -> String {
        [
            "📊 Processing Statistics:".to_string(),
            format!("   • Total employees: {}", self.employees),
            format!("   • Total days: {}", self.days),
            format!("   • Attendance records: {}", self.records),
            format!("   • Late entries: {}", self.late_entries),
            format!("   • Early exits: {}", self.early_exits),
            format!("   • Duplicates removed: {}", self.duplicates_removed),
            format!("   • Errors encountered: {}", self.errors),
        ]
        .join("\n")
    }
}
