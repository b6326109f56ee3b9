//! File system repository

use crate::domain::{DiaryDocument, DiaryEntry};
use crate::error::{DiaristError, Result};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Abstract repository for journal data
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .diarist/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .diarist/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .diarist directory exists
    fn is_initialized(&self) -> bool;

    /// Create .diarist directory structure
    fn initialize(&self) -> Result<()>;

    /// Read the entry collection named by the config
    fn load_entries(&self, config: &Config) -> Result<Vec<DiaryEntry>>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks DIARIST_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DIARIST_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DiaristError::Config(format!(
                    "DIARIST_ROOT is set to '{}' but no .diarist directory found. \
                    Run 'diarist init' in that directory or unset DIARIST_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                debug!(root = %current.display(), "found journal root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DiaristError::NotDiaristDirectory(start.to_path_buf())),
            }
        }
    }

    /// Resolve the data file against the root (absolute paths pass through)
    pub fn data_path(&self, config: &Config) -> PathBuf {
        self.root.join(&config.data_file)
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(DiaristError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&config_dir)?;
        Ok(())
    }

    fn load_entries(&self, config: &Config) -> Result<Vec<DiaryEntry>> {
        let path = self.data_path(config);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no journal data file yet, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(DiaristError::Io(e)),
        };

        let document: DiaryDocument = serde_json::from_str(&contents)
            .map_err(|source| DiaristError::DataFile {
                path: path.clone(),
                source,
            })?;

        debug!(
            path = %path.display(),
            entries = document.entries.len(),
            "loaded journal entries"
        );
        Ok(document.entries)
    }
}

// Data file creation (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Write an empty `{"entries": []}` document unless one already exists
    pub fn ensure_data_file(&self, config: &Config) -> Result<bool> {
        let path = self.data_path(config);
        if path.exists() {
            return Ok(false);
        }

        let contents = serde_json::to_string_pretty(&DiaryDocument::default())?;
        fs::write(&path, contents)?;
        Ok(true)
    }
}
