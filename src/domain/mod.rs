//! Domain layer - Entry model and the analytics engines built on it

pub mod date;
pub mod entry;
pub mod frequency;
pub mod mood;
pub mod search;
pub mod streak;
pub mod trend;

pub use date::{normalize, normalize_in, EntryDate};
pub use entry::{DiaryDocument, DiaryEntry};
pub use frequency::{post_frequency, FrequencyStats};
pub use mood::{compute_mood_stats, nearest_rating, Mood, MoodStats};
pub use search::{filter, segment, SearchResults, Segment};
pub use streak::{compute_streak, StreakStats};
pub use trend::{character_trend, character_trend_with_window, CharacterTrendStats, TrendPoint};
