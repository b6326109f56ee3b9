//! Posting-frequency histograms over a trailing window of days

use super::entry::DiaryEntry;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Default trailing window length in days (the window holds one more bucket)
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Longest window honored; larger requests are clamped to this
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// Posting counts bucketed by day, ISO week, and month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyStats {
    /// One bucket per day of the window, oldest first
    pub daily: BTreeMap<NaiveDate, usize>,
    /// Keyed `YYYY-Www` (ISO-8601 week-numbering year and week)
    pub weekly: BTreeMap<String, usize>,
    /// Keyed `YYYY-MM`
    pub monthly: BTreeMap<String, usize>,
    /// Every entry in the collection, inside the window or not
    pub total_posts: usize,
    /// `total_posts` divided by the number of day buckets
    pub average_per_day: f64,
    /// Entries skipped for the buckets because their date did not parse
    pub undated_posts: usize,
}

impl FrequencyStats {
    /// Posts that landed inside the window
    pub fn windowed_posts(&self) -> usize {
        self.daily.values().sum()
    }

    /// Busiest day in the window; earliest day wins ties
    pub fn busiest_day(&self) -> Option<(NaiveDate, usize)> {
        self.daily
            .iter()
            .filter(|(_, count)| **count > 0)
            .fold(None, |best: Option<(NaiveDate, usize)>, (day, count)| match best {
                Some((_, best_count)) if best_count >= *count => best,
                _ => Some((*day, *count)),
            })
    }
}

/// Week bucket key using ISO-8601 week numbering, e.g. `2025-W03`.
///
/// Days at the year boundary belong to the ISO week-numbering year, so
/// 2024-12-31 is `2025-W01` and 2021-01-01 is `2020-W53`.
pub fn week_key(day: NaiveDate) -> String {
    let week = day.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Month bucket key, e.g. `2025-01`
pub fn month_key(day: NaiveDate) -> String {
    format!("{}-{:02}", day.year(), day.month())
}

/// Build the posting histogram for the `window_days + 1` days ending at `today`.
///
/// Entries whose day is outside the window, or whose date is unparseable, do
/// not touch the buckets. `total_posts` still counts every entry.
///
/// `window_days` is clamped to [`MAX_WINDOW_DAYS`], and the window never
/// starts before the earliest representable date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use diarist::domain::entry::DiaryEntry;
/// use diarist::domain::frequency::post_frequency;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
/// let entries = vec![
///     DiaryEntry::new("1", "a", "b").with_date("2025-01-17T09:00:00"),
///     DiaryEntry::new("2", "a", "b").with_date("2019-05-01"),
/// ];
/// let stats = post_frequency(&entries, 6, today);
/// assert_eq!(stats.daily.len(), 7);
/// assert_eq!(stats.daily[&today], 1);
/// assert_eq!(stats.total_posts, 2);
/// ```
pub fn post_frequency(entries: &[DiaryEntry], window_days: u32, today: NaiveDate) -> FrequencyStats {
    if window_days > MAX_WINDOW_DAYS {
        debug!(requested = window_days, max = MAX_WINDOW_DAYS, "clamping frequency window");
    }
    let window_days = window_days.min(MAX_WINDOW_DAYS);
    let start = today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN);

    let mut daily: BTreeMap<NaiveDate, usize> = start
        .iter_days()
        .take_while(|day| *day <= today)
        .map(|day| (day, 0))
        .collect();

    let mut undated_posts = 0;
    for entry in entries {
        match entry.normalized_date().day() {
            Some(day) => {
                if let Some(bucket) = daily.get_mut(&day) {
                    *bucket += 1;
                }
            }
            None => {
                debug!(id = %entry.id, date = %entry.date, "skipping entry with unparseable date");
                undated_posts += 1;
            }
        }
    }

    let mut weekly: BTreeMap<String, usize> = BTreeMap::new();
    let mut monthly: BTreeMap<String, usize> = BTreeMap::new();
    for (day, count) in &daily {
        *weekly.entry(week_key(*day)).or_insert(0) += count;
        *monthly.entry(month_key(*day)).or_insert(0) += count;
    }

    let total_posts = entries.len();
    // daily always holds at least `today`
    let average_per_day = total_posts as f64 / daily.len().max(1) as f64;

    FrequencyStats {
        daily,
        weekly,
        monthly,
        total_posts,
        average_per_day,
        undated_posts,
    }
}
