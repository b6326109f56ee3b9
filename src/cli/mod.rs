//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_frequency, format_mood_stats, format_search_results, format_streak, format_summary,
    format_trend,
};
