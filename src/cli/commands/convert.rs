use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timezone::{to_local, to_utc};
use crate::errors::{AppError, AppResult};

const FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Handle the `convert` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert { timestamp } = cmd {
        let offset = cfg.pipeline()?.parser.offset;

        let ts: i64 = timestamp
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidTimestamp(timestamp.clone()))?;

        let utc = to_utc(ts).ok_or_else(|| AppError::InvalidTimestamp(timestamp.clone()))?;
        let local = to_local(ts, offset).ok_or_else(|| AppError::InvalidTimestamp(timestamp.clone()))?;

        println!("UTC:   {}", utc.format(FMT));
        println!("Local: {} ({})", local.format(FMT), offset);
    }

    Ok(())
}
