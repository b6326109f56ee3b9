//! Consecutive-day posting streaks

use super::entry::DiaryEntry;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreakStats {
    /// Run ending at the last post day, zero unless that day is today or yesterday
    pub current_streak: usize,
    /// Longest run of consecutive posting days ever
    pub max_streak: usize,
    pub last_post_day: Option<NaiveDate>,
    /// Distinct calendar days with at least one dated entry
    pub total_days_posted: usize,
}

/// Compute current and longest consecutive-day streaks relative to `today`.
///
/// Multiple entries on one day count once. Entries with unparseable dates are
/// ignored.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use diarist::domain::entry::DiaryEntry;
/// use diarist::domain::streak::compute_streak;
///
/// let entries = vec![
///     DiaryEntry::new("1", "a", "b").with_date("2025-01-15"),
///     DiaryEntry::new("2", "a", "b").with_date("2025-01-16"),
/// ];
/// let today = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
/// let stats = compute_streak(&entries, today);
/// assert_eq!(stats.current_streak, 2);
/// assert_eq!(stats.max_streak, 2);
/// ```
pub fn compute_streak(entries: &[DiaryEntry], today: NaiveDate) -> StreakStats {
    let days: BTreeSet<NaiveDate> = entries
        .iter()
        .filter_map(|entry| entry.normalized_date().day())
        .collect();

    let Some(last_post_day) = days.last().copied() else {
        return StreakStats::default();
    };

    let mut max_streak = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;
    for day in &days {
        run = match previous {
            Some(prev) if *day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        max_streak = max_streak.max(run);
        previous = Some(*day);
    }

    let yesterday = today - Duration::days(1);
    let current_streak = if last_post_day == today || last_post_day == yesterday {
        trailing_run(&days)
    } else {
        0
    };

    StreakStats {
        current_streak,
        max_streak,
        last_post_day: Some(last_post_day),
        total_days_posted: days.len(),
    }
}

/// Length of the consecutive run ending at the latest day
fn trailing_run(days: &BTreeSet<NaiveDate>) -> usize {
    let mut iter = days.iter().rev();
    let Some(mut expected) = iter.next().copied() else {
        return 0;
    };

    let mut run = 1;
    for day in iter {
        expected = expected - Duration::days(1);
        if *day != expected {
            break;
        }
        run += 1;
    }
    run
}
