//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function, and the punch-log
//! pipeline (`core::pipeline`) for use without the CLI.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Process { .. } => cli::commands::process::handle(&cli.command, cfg),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --config overrides the per-user location
    let cfg_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    let cfg = Config::load_from(&cfg_path)?;

    dispatch(&cli, &cfg, &cfg_path)
}
