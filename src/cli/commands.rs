//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diarist")]
#[command(about = "Insights for a local journal: search, moods, frequency, streaks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Search entries by keyword and date range
    Search {
        /// Case-insensitive keyword matched against title and content
        keyword: Option<String>,

        /// Start date inclusive (DD-MM-YYYY)
        #[arg(long)]
        from: Option<String>,

        /// End date inclusive (DD-MM-YYYY)
        #[arg(long)]
        to: Option<String>,

        /// Mark keyword hits in the output
        #[arg(long)]
        highlight: bool,
    },

    /// Mood rating distribution
    Moods,

    /// Posting frequency histogram
    Frequency {
        /// Trailing window in days, at most 3660 (default: configured window_days)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=3660))]
        days: Option<u32>,
    },

    /// Writing volume over time
    Trend,

    /// Current and longest daily posting streak
    Streak,

    /// All statistics at once
    Stats,
}
