//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Service for creating a new journal directory
pub struct InitService;

impl InitService {
    /// Initialize a new journal at the specified path.
    ///
    /// Creates `.diarist/config.toml` and, if absent, an empty data file.
    /// An existing data file is left alone so a journal can be adopted in place.
    pub fn execute(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config::new();
        repo.save_config(&config)?;

        let created = repo.ensure_data_file(&config)?;
        info!(root = %path.display(), created_data_file = created, "initialized journal");

        println!("Initialized diarist journal at {}", path.display());
        if created {
            println!("Created empty {}", config.data_file);
        } else {
            println!("Using existing {}", config.data_file);
        }

        Ok(())
    }
}
