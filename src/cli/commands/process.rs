use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::core::stats::ProcessingStats;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTargets};
use crate::ui::messages::{header, info, success, warning};
use std::path::Path;

const MAX_INLINE_ERRORS: usize = 10;

/// Handle the `process` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        input,
        json,
        csv,
        xlsx,
        errors,
        no_stats,
        force,
    } = cmd
    {
        let pipeline = Pipeline::new(cfg.pipeline()?);
        let mut report = pipeline.process_file(Path::new(input));

        if let Some(diagnostic) = report.diagnostic.take() {
            return Err(diagnostic);
        }

        info(format!(
            "Read {} line(s) from {}",
            report.stats.lines_read, input
        ));

        if report.stats.duplicates_removed > 0 {
            success(format!(
                "Removed {} duplicate record(s)",
                report.stats.duplicates_removed
            ));
        }

        if report.stats.parsed == 0 {
            warning("No valid data to process.");
        }

        let targets = ExportTargets::resolve(
            &cfg.output_dir(),
            json.as_deref(),
            csv.as_deref(),
            xlsx.as_deref(),
            errors.as_deref(),
        );

        if targets.is_empty() {
            info("No output requested (use --json, --csv, --xlsx or --errors).");
        } else {
            ExportLogic::export(&report, &targets, pipeline.config().flag_encoding, *force)?;
        }

        if !*no_stats {
            header("Statistics");
            println!("{}", ProcessingStats::from_report(&report).render());
        }

        // without an error log, show a few rejected lines inline
        if targets.errors.is_none() && !report.errors.is_empty() {
            for e in report.errors.iter().take(MAX_INLINE_ERRORS) {
                warning(e);
            }
            if report.errors.len() > MAX_INLINE_ERRORS {
                warning(format!(
                    "… and {} more (use --errors FILE)",
                    report.errors.len() - MAX_INLINE_ERRORS
                ));
            }
        }
    }

    Ok(())
}
