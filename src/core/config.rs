use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Write defaults to `path`. Refuses to clobber an existing file unless `force`.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default().save_to(path)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        if !path.exists() {
            Self::init(path, false)?;
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{editor_to_use}'"
                ));
                return Ok(());
            }
            Ok(_) | Err(_) => warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{default_editor}'"
                ));
                Ok(())
            }
            Ok(_) | Err(_) => {
                error(format!(
                    "Failed to edit configuration file using fallback '{default_editor}'"
                ));
                Err(AppError::Config(format!("no usable editor for {}", path.display())))
            }
        }
    }
}
