use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        edit_config,
        editor,
        force,
    } = cmd
    {
        if *init {
            ConfigLogic::init(path, *force)?;
        }

        if *print_config {
            ConfigLogic::print(cfg, path)?;
        }

        if *edit_config {
            ConfigLogic::edit(path, editor)?;
        }
    }

    Ok(())
}
