//! Journal insights use case
//!
//! Loads the entry collection once and runs the analytics engines over that
//! snapshot. Nothing here caches results; every call recomputes.

use crate::domain::{
    character_trend_with_window, compute_mood_stats, compute_streak, post_frequency,
    CharacterTrendStats, DiaryEntry, FrequencyStats, MoodStats, StreakStats,
};
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use chrono::NaiveDate;
use serde::Serialize;

/// Every derived statistic for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsSummary {
    pub total_entries: usize,
    pub moods: MoodStats,
    pub frequency: FrequencyStats,
    pub trend: CharacterTrendStats,
    pub streak: StreakStats,
}

/// Read-only view over a loaded journal
pub struct InsightsService {
    config: Config,
    entries: Vec<DiaryEntry>,
}

impl InsightsService {
    /// Load config and entries from the repository
    pub fn load(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let entries = repository.load_entries(&config)?;
        Ok(Self::from_entries(config, entries))
    }

    pub fn from_entries(config: Config, entries: Vec<DiaryEntry>) -> Self {
        InsightsService { config, entries }
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn moods(&self) -> MoodStats {
        compute_mood_stats(&self.entries)
    }

    /// Histogram over `window_days`, or the configured window when `None`
    pub fn frequency(&self, window_days: Option<u32>, today: NaiveDate) -> FrequencyStats {
        let window = window_days.unwrap_or(self.config.window_days);
        post_frequency(&self.entries, window, today)
    }

    pub fn trend(&self) -> CharacterTrendStats {
        character_trend_with_window(&self.entries, self.config.recent_count)
    }

    pub fn streak(&self, today: NaiveDate) -> StreakStats {
        compute_streak(&self.entries, today)
    }

    pub fn summary(&self, today: NaiveDate) -> InsightsSummary {
        InsightsSummary {
            total_entries: self.entries.len(),
            moods: self.moods(),
            frequency: self.frequency(None, today),
            trend: self.trend(),
            streak: self.streak(today),
        }
    }
}
