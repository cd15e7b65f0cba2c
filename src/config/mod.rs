use crate::core::classifier::{RECENT_WINDOW_MINUTES, UPCOMING_WINDOW_MINUTES, Windows};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Longest accepted window, one day.
pub const MAX_WINDOW_MINUTES: i64 = 24 * 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_upcoming_window")]
    pub upcoming_window_minutes: i64,
    #[serde(default = "default_recent_window")]
    pub recent_window_minutes: i64,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
}

fn default_upcoming_window() -> i64 {
    UPCOMING_WINDOW_MINUTES
}
fn default_recent_window() -> i64 {
    RECENT_WINDOW_MINUTES
}
fn default_tick_interval() -> u64 {
    1000
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_use_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upcoming_window_minutes: default_upcoming_window(),
            recent_window_minutes: default_recent_window(),
            tick_interval_ms: default_tick_interval(),
            separator_char: default_separator_char(),
            use_colors: default_use_colors(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rbreakmonitor")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rbreakmonitor")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbreakmonitor.conf")
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if self.upcoming_window_minutes < 0 || self.recent_window_minutes < 0 {
            return Err(AppError::Config(
                "window lengths must not be negative".to_string(),
            ));
        }
        if self.upcoming_window_minutes > MAX_WINDOW_MINUTES
            || self.recent_window_minutes > MAX_WINDOW_MINUTES
        {
            return Err(AppError::Config(format!(
                "window lengths must not exceed {MAX_WINDOW_MINUTES} minutes"
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(AppError::Config(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn windows(&self) -> Windows {
        Windows::from_minutes(self.upcoming_window_minutes, self.recent_window_minutes)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
