//! Mood ratings and their distribution

use super::entry::DiaryEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The five fixed mood levels, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Awful = 1,
    Bad = 2,
    Okay = 3,
    Good = 4,
    Great = 5,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Awful, Mood::Bad, Mood::Okay, Mood::Good, Mood::Great];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Awful => "awful",
            Mood::Bad => "bad",
            Mood::Okay => "okay",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Awful => "😢",
            Mood::Bad => "😕",
            Mood::Okay => "😐",
            Mood::Good => "🙂",
            Mood::Great => "😄",
        }
    }
}

impl TryFrom<u8> for Mood {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Mood::Awful),
            2 => Ok(Mood::Bad),
            3 => Ok(Mood::Okay),
            4 => Ok(Mood::Good),
            5 => Ok(Mood::Great),
            _ => Err(format!("Invalid mood rating: {}. Valid ratings are 1-5", value)),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// Distribution of mood ratings across a set of entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStats {
    /// Count per rating; all five ratings are always present
    pub per_rating: BTreeMap<Mood, usize>,
    pub total_rated: usize,
    /// Weighted mean rating, 0 when nothing is rated
    pub average: f64,
}

impl MoodStats {
    /// Most frequent rating; ties go to the higher rating
    pub fn dominant(&self) -> Option<Mood> {
        if self.total_rated == 0 {
            return None;
        }
        self.per_rating
            .iter()
            .filter(|(_, count)| **count > 0)
            .max_by_key(|(mood, count)| (**count, **mood))
            .map(|(mood, _)| *mood)
    }

    /// Share of rated entries carrying `mood`, in `[0, 1]`
    pub fn share(&self, mood: Mood) -> f64 {
        if self.total_rated == 0 {
            return 0.0;
        }
        self.per_rating.get(&mood).copied().unwrap_or(0) as f64 / self.total_rated as f64
    }
}

/// Count entries per mood rating and compute the weighted average.
///
/// Entries without a rating (or with one outside 1..=5) do not contribute.
///
/// # Examples
///
/// ```
/// use diarist::domain::entry::DiaryEntry;
/// use diarist::domain::mood::compute_mood_stats;
///
/// let entries = vec![
///     DiaryEntry::new("1", "a", "b").with_mood(5),
///     DiaryEntry::new("2", "a", "b").with_mood(3),
///     DiaryEntry::new("3", "a", "b"),
/// ];
/// let stats = compute_mood_stats(&entries);
/// assert_eq!(stats.total_rated, 2);
/// assert_eq!(stats.average, 4.0);
/// ```
pub fn compute_mood_stats(entries: &[DiaryEntry]) -> MoodStats {
    let mut per_rating: BTreeMap<Mood, usize> = Mood::ALL.iter().map(|m| (*m, 0)).collect();

    for mood in entries.iter().filter_map(DiaryEntry::rating) {
        *per_rating.entry(mood).or_insert(0) += 1;
    }

    let total_rated: usize = per_rating.values().sum();
    let weighted: usize = per_rating
        .iter()
        .map(|(mood, count)| mood.value() as usize * count)
        .sum();

    let average = if total_rated == 0 {
        0.0
    } else {
        weighted as f64 / total_rated as f64
    };

    MoodStats {
        per_rating,
        total_rated,
        average,
    }
}

/// Map an average back to the nearest discrete rating (round half up).
///
/// Returns `None` for NaN or anything that rounds outside 1..=5.
pub fn nearest_rating(average: f64) -> Option<Mood> {
    if !average.is_finite() {
        return None;
    }
    let rounded = (average + 0.5).floor();
    if !(1.0..=5.0).contains(&rounded) {
        return None;
    }
    Mood::try_from(rounded as u8).ok()
}
