//! Config management use case

use crate::domain::frequency::MAX_WINDOW_DAYS;
use crate::error::{DiaristError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "data_file" => Ok(config.data_file),
            "window_days" => Ok(config.window_days.to_string()),
            "recent_count" => Ok(config.recent_count.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DiaristError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: data_file, window_days, recent_count, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "data_file" => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DiaristError::Config(
                        "data_file cannot be empty".to_string(),
                    ));
                }
                config.data_file = trimmed.to_string();
            }
            "window_days" => {
                let out_of_range = || {
                    DiaristError::Config(format!(
                        "window_days must be a number from 0 to {}, got '{}'",
                        MAX_WINDOW_DAYS, value
                    ))
                };
                let days: u32 = value.trim().parse().map_err(|_| out_of_range())?;
                if days > MAX_WINDOW_DAYS {
                    return Err(out_of_range());
                }
                config.window_days = days;
            }
            "recent_count" => {
                let count: usize = value.trim().parse().map_err(|_| {
                    DiaristError::Config(format!(
                        "recent_count must be a positive number, got '{}'",
                        value
                    ))
                })?;
                if count == 0 {
                    return Err(DiaristError::Config(
                        "recent_count must be a positive number, got '0'".to_string(),
                    ));
                }
                config.recent_count = count;
            }
            "created" => {
                return Err(DiaristError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DiaristError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: data_file, window_days, recent_count",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
