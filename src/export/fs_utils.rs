// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Resolve an output path: absolute paths are kept, relative ones are
/// placed under `output_dir`.
pub(crate) fn resolve_output(output_dir: &Path, file: &str) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        output_dir.join(p)
    }
}

/// Verifica se un file può essere creato o sovrascritto.
///
/// - missing file → Ok
/// - existing file and `force` → Ok
/// - existing file without `force` → ask on stdin
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "existing file '{}' not overwritten",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_go_under_output_dir() {
        let dir = Path::new("/tmp/reports");
        assert_eq!(
            resolve_output(dir, "summary.json"),
            PathBuf::from("/tmp/reports/summary.json")
        );
        assert_eq!(
            resolve_output(dir, "/var/out.csv"),
            PathBuf::from("/var/out.csv")
        );
    }
}
