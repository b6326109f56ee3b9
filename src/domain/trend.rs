//! Chronological writing-volume trend

use super::entry::DiaryEntry;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Number of trailing entries averaged into `recent_average`
pub const DEFAULT_RECENT_WINDOW: usize = 7;

/// One entry's contribution to the trend series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDateTime,
    /// Title plus content length in Unicode scalar values, so a CJK character
    /// or an emoji outside the BMP such as 😀 counts as 1
    pub char_count: usize,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterTrendStats {
    /// Dated entries, oldest first
    pub series: Vec<TrendPoint>,
    pub average: f64,
    pub max: usize,
    pub min: usize,
    /// Mean over the last entries of the series, by position
    pub recent_average: f64,
}

impl CharacterTrendStats {
    /// Whether recent writing runs longer than the overall average
    pub fn is_trending_up(&self) -> bool {
        !self.series.is_empty() && self.recent_average > self.average
    }
}

/// Writing-volume trend with the default recent window of seven entries.
///
/// # Examples
///
/// ```
/// use diarist::domain::entry::DiaryEntry;
/// use diarist::domain::trend::character_trend;
///
/// let entries = vec![DiaryEntry::new("1", "AB", "CDE").with_date("2025-01-17")];
/// let trend = character_trend(&entries);
/// assert_eq!(trend.series[0].char_count, 5);
/// ```
pub fn character_trend(entries: &[DiaryEntry]) -> CharacterTrendStats {
    character_trend_with_window(entries, DEFAULT_RECENT_WINDOW)
}

/// Writing-volume trend averaging the last `recent` entries (at least one).
pub fn character_trend_with_window(entries: &[DiaryEntry], recent: usize) -> CharacterTrendStats {
    let mut series: Vec<TrendPoint> = entries
        .iter()
        .filter_map(|entry| {
            entry.normalized_date().datetime().map(|date| TrendPoint {
                date,
                char_count: entry.title.chars().count() + entry.content.chars().count(),
                title: entry.title.clone(),
            })
        })
        .collect();

    // Stable sort keeps input order for identical timestamps
    series.sort_by_key(|point| point.date);

    let counts: Vec<usize> = series.iter().map(|p| p.char_count).collect();
    let recent = recent.max(1);
    let tail = &counts[counts.len().saturating_sub(recent)..];

    CharacterTrendStats {
        average: mean(&counts),
        max: counts.iter().copied().max().unwrap_or(0),
        min: counts.iter().copied().min().unwrap_or(0),
        recent_average: mean(tail),
        series,
    }
}

fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}
