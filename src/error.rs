//! Error types for diarist

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the diarist application.
///
/// The analytics engines never fail; these errors come from locating the
/// journal, reading its data file, configuration, and argument parsing.
#[derive(Debug, Error)]
pub enum DiaristError {
    #[error("Not a diarist directory: {0}")]
    NotDiaristDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Could not read journal data at {}: {source}", .path.display())]
    DataFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaristError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaristError::NotDiaristDirectory(_) => 2,
            DiaristError::InvalidDate(_) => 3,
            DiaristError::DataFile { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaristError::NotDiaristDirectory(path) => {
                format!(
                    "Not a diarist directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'diarist init' in this directory to create a new journal\n\
                    • Navigate to an existing diarist directory\n\
                    • Set DIARIST_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            DiaristError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: DD-MM-YYYY\n\n\
                    Examples:\n\
                    diarist search --from 01-01-2025 --to 31-01-2025\n\
                    diarist search walk --from 17-01-2025",
                    input
                )
            }
            DiaristError::DataFile { path, source } => {
                format!(
                    "Could not read journal data at {}: {}\n\n\
                    Suggestions:\n\
                    • The file must be a JSON object with an \"entries\" array\n\
                    • Restore the file from a backup\n\
                    • Point diarist at another file: diarist config data_file 'backup.json'",
                    path.display(),
                    source
                )
            }
            DiaristError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: data_file, window_days, recent_count, created\n\
                        Example: diarist config window_days 14",
                        msg
                    )
                } else if msg.contains("window_days must be") {
                    format!(
                        "{}\n\n\
                        Example: diarist config window_days 30",
                        msg
                    )
                } else if msg.contains("positive number") {
                    format!(
                        "{}\n\n\
                        Example: diarist config recent_count 7",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaristError
pub type Result<T> = std::result::Result<T, DiaristError>;
