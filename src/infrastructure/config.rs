//! Configuration management

use crate::domain::frequency::DEFAULT_WINDOW_DAYS;
use crate::domain::trend::DEFAULT_RECENT_WINDOW;
use crate::error::{DiaristError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".diarist";
pub const DEFAULT_DATA_FILE: &str = "diary.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Journal document, relative to the journal root unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Trailing window for the frequency histogram
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    /// Entries averaged into the recent writing-volume figure
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
    pub created: DateTime<Utc>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_recent_count() -> usize {
    DEFAULT_RECENT_WINDOW
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            data_file: default_data_file(),
            window_days: default_window_days(),
            recent_count: default_recent_count(),
            created: Utc::now(),
        }
    }

    /// Load config from .diarist/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaristError::NotDiaristDirectory(path.to_path_buf())
            } else {
                DiaristError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DiaristError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .diarist/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join("config.toml");

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
