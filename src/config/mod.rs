use crate::core::parser::{NameLayout, ParserOptions};
use crate::core::pipeline::PipelineConfig;
use crate::core::shift::ShiftPolicy;
use crate::core::timezone::offset_from_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::flag_encoding::FlagEncoding;
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_shift_start")]
    pub shift_start: String,
    #[serde(default = "default_shift_end")]
    pub shift_end: String,
    #[serde(default = "default_late_entry_limit")]
    pub late_entry_limit: String,
    #[serde(default = "default_early_exit_limit")]
    pub early_exit_limit: String,
    #[serde(default = "default_min_columns")]
    pub min_columns: usize,
    #[serde(default = "default_max_columns")]
    pub max_columns: usize,
    #[serde(default = "default_timestamp_min_digits")]
    pub timestamp_min_digits: usize,
    #[serde(default)]
    pub name_layout: NameLayout,
    #[serde(default)]
    pub flag_encoding: FlagEncoding,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_utc_offset_minutes() -> i32 {
    360
}
fn default_shift_start() -> String {
    "09:00".to_string()
}
fn default_shift_end() -> String {
    "18:00".to_string()
}
fn default_late_entry_limit() -> String {
    "09:30".to_string()
}
fn default_early_exit_limit() -> String {
    "17:00".to_string()
}
fn default_min_columns() -> usize {
    4
}
fn default_max_columns() -> usize {
    6
}
fn default_timestamp_min_digits() -> usize {
    7
}
fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
            shift_start: default_shift_start(),
            shift_end: default_shift_end(),
            late_entry_limit: default_late_entry_limit(),
            early_exit_limit: default_early_exit_limit(),
            min_columns: default_min_columns(),
            max_columns: default_max_columns(),
            timestamp_min_digits: default_timestamp_min_digits(),
            name_layout: NameLayout::default(),
            flag_encoding: FlagEncoding::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

        // an empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        }

        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    /// Validate and turn the raw settings into a pipeline configuration.
    pub fn pipeline(&self) -> AppResult<PipelineConfig> {
        if self.min_columns == 0 || self.min_columns > self.max_columns {
            return Err(AppError::Config(format!(
                "invalid column bounds: min_columns={} max_columns={}",
                self.min_columns, self.max_columns
            )));
        }

        if self.timestamp_min_digits == 0 {
            return Err(AppError::Config(
                "timestamp_min_digits must be at least 1".into(),
            ));
        }

        let offset = offset_from_minutes(self.utc_offset_minutes).ok_or_else(|| {
            AppError::Config(format!(
                "utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))
        })?;

        let shift = ShiftPolicy {
            shift_start: config_time("shift_start", &self.shift_start)?,
            shift_end: config_time("shift_end", &self.shift_end)?,
            late_entry_limit: config_time("late_entry_limit", &self.late_entry_limit)?,
            early_exit_limit: config_time("early_exit_limit", &self.early_exit_limit)?,
        };

        Ok(PipelineConfig {
            parser: ParserOptions {
                min_columns: self.min_columns,
                max_columns: self.max_columns,
                name_layout: self.name_layout,
                offset,
            },
            timestamp_min_digits: self.timestamp_min_digits,
            shift,
            flag_encoding: self.flag_encoding,
        })
    }
}

fn config_time(field: &str, value: &str) -> AppResult<NaiveTime> {
    parse_time(value)
        .ok_or_else(|| AppError::Config(format!("{field}: invalid time '{value}' (expected HH:MM)")))
}
