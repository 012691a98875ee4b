// src/export/mod.rs

mod error_log;
mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use error_log::render_error_log;
pub use logic::{ExportLogic, ExportTargets};
pub use model::{SheetRow, SummaryDocument, SummaryExport};

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
