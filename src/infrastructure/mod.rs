//! Infrastructure layer - Journal discovery, configuration, and data loading

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository};
