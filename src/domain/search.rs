//! Keyword and date-range filtering of entries
//!
//! Filtering never reorders; it only drops entries that fail the keyword test
//! or fall outside the inclusive date bounds. [`segment`] splits text around
//! keyword hits for consumers that want to highlight them.

use super::entry::DiaryEntry;
use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::{debug, warn};

/// Result of a filter pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    /// Matching entries in their original order
    pub results: Vec<&'a DiaryEntry>,
    pub match_count: usize,
    pub total_count: usize,
}

/// A run of text that either matched the keyword or did not
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn new(text: &str, is_match: bool) -> Self {
        Segment {
            text: text.to_string(),
            is_match,
        }
    }
}

/// Filter entries by keyword and an optional inclusive date range.
///
/// - An empty or whitespace-only keyword matches every entry.
/// - Otherwise the keyword is matched case-insensitively against title or
///   content, using the same Unicode case folding as [`segment`].
/// - `from` includes its whole day, `to` includes its whole day.
/// - Entries with an unparseable date are dropped when either bound is set and
///   kept when neither is.
///
/// # Examples
///
/// ```
/// use diarist::domain::entry::DiaryEntry;
/// use diarist::domain::search::filter;
///
/// let entries = vec![
///     DiaryEntry::new("1", "Morning run", "Felt great").with_date("2025-01-15"),
///     DiaryEntry::new("2", "Work", "Long meeting").with_date("2025-01-16"),
/// ];
/// let found = filter(&entries, "RUN", None, None);
/// assert_eq!(found.match_count, 1);
/// assert_eq!(found.results[0].id, "1");
/// ```
pub fn filter<'a>(
    entries: &'a [DiaryEntry],
    keyword: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> SearchResults<'a> {
    let needle = keyword.trim();
    // None for an empty keyword, which matches everything
    let pattern = (!needle.is_empty()).then(|| keyword_pattern(needle));
    let bounded = from.is_some() || to.is_some();

    let results: Vec<&DiaryEntry> = entries
        .iter()
        .filter(|entry| match &pattern {
            None => true,
            Some(compiled) => matches_keyword(entry, compiled.as_ref()),
        })
        .filter(|entry| !bounded || within_bounds(entry, from, to))
        .collect();

    debug!(
        keyword = %needle,
        matched = results.len(),
        total = entries.len(),
        "filtered entries"
    );

    SearchResults {
        match_count: results.len(),
        total_count: entries.len(),
        results,
    }
}

/// Case-insensitive literal matcher for a trimmed, non-empty keyword.
///
/// `None` when the escaped keyword exceeds the compiled size limit; such a
/// keyword matches nothing.
fn keyword_pattern(needle: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            warn!(error = %err, "keyword too large to search for");
            None
        }
    }
}

fn matches_keyword(entry: &DiaryEntry, pattern: Option<&Regex>) -> bool {
    pattern.is_some_and(|regex| regex.is_match(&entry.title) || regex.is_match(&entry.content))
}

fn within_bounds(entry: &DiaryEntry, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    let Some(day) = entry.normalized_date().day() else {
        debug!(id = %entry.id, date = %entry.date, "excluding entry with unparseable date from ranged search");
        return false;
    };

    if let Some(from_date) = from {
        if day < from_date {
            return false;
        }
    }

    if let Some(to_date) = to {
        if day > to_date {
            return false;
        }
    }

    true
}

/// Split `text` around case-insensitive occurrences of `keyword`.
///
/// Original casing is preserved in both matched and unmatched segments. With
/// an empty keyword, or no occurrence, the whole text is one non-matching
/// segment.
///
/// # Examples
///
/// ```
/// use diarist::domain::search::segment;
///
/// let parts = segment("Hello World", "world");
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[0].text, "Hello ");
/// assert!(!parts[0].is_match);
/// assert_eq!(parts[1].text, "World");
/// assert!(parts[1].is_match);
/// ```
pub fn segment(text: &str, keyword: &str) -> Vec<Segment> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return vec![Segment::new(text, false)];
    }

    let Some(pattern) = keyword_pattern(keyword) else {
        return vec![Segment::new(text, false)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for hit in pattern.find_iter(text) {
        if hit.start() > last {
            segments.push(Segment::new(&text[last..hit.start()], false));
        }
        segments.push(Segment::new(hit.as_str(), true));
        last = hit.end();
    }
    if last < text.len() {
        segments.push(Segment::new(&text[last..], false));
    }

    if segments.is_empty() {
        segments.push(Segment::new(text, false));
    }
    segments
}
