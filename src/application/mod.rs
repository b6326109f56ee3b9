//! Application layer - Use cases and orchestration

pub mod init;
pub mod insights;
pub mod manage_config;
pub mod search_entries;

pub use init::InitService;
pub use insights::{InsightsService, InsightsSummary};
pub use manage_config::ConfigService;
pub use search_entries::{parse_date_arg, SearchQuery};
