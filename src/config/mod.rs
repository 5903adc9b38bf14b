use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

/// Keys every configuration file is expected to carry.
pub const KNOWN_KEYS: [&str; 6] = [
    "alert_threshold",
    "auto_alert",
    "refresh_interval_secs",
    "top_drivers",
    "log_level",
    "separator_char",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: u8,
    #[serde(default = "default_auto_alert")]
    pub auto_alert: bool,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_top_drivers")]
    pub top_drivers: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_alert_threshold() -> u8 {
    70
}
fn default_auto_alert() -> bool {
    true
}
fn default_refresh_interval() -> u64 {
    60
}
fn default_top_drivers() -> usize {
    5
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alert_threshold: default_alert_threshold(),
            auto_alert: default_auto_alert(),
            refresh_interval_secs: default_refresh_interval(),
            top_drivers: default_top_drivers(),
            log_level: default_log_level(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fleetwatch")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fleetwatch.conf")
    }

    /// Load configuration from file, or return defaults if the file is missing.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.alert_threshold > 100 {
            return Err(AppError::Config(format!(
                "alert_threshold must be between 0 and 100, got {}",
                self.alert_threshold
            )));
        }
        if self.refresh_interval_secs == 0 {
            return Err(AppError::Config(
                "refresh_interval_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Keys from [`KNOWN_KEYS`] that the YAML text does not set.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let map = value.as_mapping();
        Ok(KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| map.is_none_or(|m| !m.contains_key(*k)))
            .collect())
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn init_file(path: &Path) -> AppResult<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let config = Self::default();
        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(config)
    }
}
