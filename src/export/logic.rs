// src/export/logic.rs

use crate::core::pipeline::AttendanceReport;
use crate::errors::AppResult;
use crate::export::error_log::export_error_log;
use crate::export::fs_utils::{ensure_writable, resolve_output};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{table_to_document, table_to_sheet_rows};
use crate::export::xlsx::export_xlsx;
use crate::models::flag_encoding::FlagEncoding;
use crate::ui::messages::{success, warning};
use std::path::{Path, PathBuf};

/// Where each output goes. `None` skips that output.
#[derive(Debug, Clone, Default)]
pub struct ExportTargets {
    pub json: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub xlsx: Option<PathBuf>,
    pub errors: Option<PathBuf>,
}

impl ExportTargets {
    /// Build targets from CLI file names, relative ones under `output_dir`.
    pub fn resolve(
        output_dir: &Path,
        json: Option<&str>,
        csv: Option<&str>,
        xlsx: Option<&str>,
        errors: Option<&str>,
    ) -> Self {
        let r = |f: Option<&str>| f.map(|f| resolve_output(output_dir, f));
        Self {
            json: r(json),
            csv: r(csv),
            xlsx: r(xlsx),
            errors: r(errors),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.json.is_none() && self.csv.is_none() && self.xlsx.is_none() && self.errors.is_none()
    }
}

/// Writes the outputs of a processed report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every requested output for a processed report.
    ///
    /// Summary files are only written when the table has rows; the error
    /// log only when there were rejected lines. Every file about to be
    /// written is checked for overwrite first, so a refusal leaves all of
    /// them untouched.
    pub fn export(
        report: &AttendanceReport,
        targets: &ExportTargets,
        encoding: FlagEncoding,
        force: bool,
    ) -> AppResult<()> {
        let has_rows = !report.table.is_empty();
        let has_errors = !report.errors.is_empty();

        let pending = [
            (&targets.json, has_rows),
            (&targets.csv, has_rows),
            (&targets.xlsx, has_rows),
            (&targets.errors, has_errors),
        ];
        for (target, needed) in pending {
            if let (Some(path), true) = (target, needed) {
                ensure_writable(path, force)?;
            }
        }

        if !has_rows {
            warning("No summary rows to export.");
        } else {
            if let Some(path) = &targets.json {
                export_json(&table_to_document(&report.table, encoding), path)?;
            }

            let rows = table_to_sheet_rows(&report.table, encoding);

            if let Some(path) = &targets.csv {
                export_csv(&rows, path)?;
            }

            if let Some(path) = &targets.xlsx {
                export_xlsx(&rows, path)?;
            }
        }

        if let Some(path) = &targets.errors {
            if has_errors {
                export_error_log(&report.errors, path)?;
                warning(format!(
                    "{} row(s) skipped. Check: {}",
                    report.errors.len(),
                    path.display()
                ));
            } else {
                success("All rows processed successfully (no errors).");
            }
        }

        Ok(())
    }
}
