//! Entry date normalization
//!
//! Persisted entries carry their creation time as text in one of two shapes:
//! a localized long form (`2024年3月15日星期五 14:30:05`, `2024/3/15 14:30:05`)
//! or an ISO-8601 timestamp (`2024-03-15T14:30:05.123Z`). [`normalize`] turns
//! either into a comparable [`EntryDate`].
//!
//! The localized form is already local wall-clock time. Timestamps carrying an
//! offset are shifted into the same local frame, so one instant stored in
//! either shape lands on the same calendar day.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;
use std::sync::OnceLock;

/// Result of normalizing an entry's stored date text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryDate {
    /// A successfully parsed point in time (local wall clock)
    Canonical(NaiveDateTime),
    /// No supported format matched
    Unparseable,
}

impl EntryDate {
    pub fn is_parseable(&self) -> bool {
        matches!(self, EntryDate::Canonical(_))
    }

    /// The parsed date-time, if any
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            EntryDate::Canonical(dt) => Some(*dt),
            EntryDate::Unparseable => None,
        }
    }

    /// The calendar day, if any
    pub fn day(&self) -> Option<NaiveDate> {
        self.datetime().map(|dt| dt.date())
    }
}

impl From<Option<NaiveDateTime>> for EntryDate {
    fn from(value: Option<NaiveDateTime>) -> Self {
        value.map_or(EntryDate::Unparseable, EntryDate::Canonical)
    }
}

fn localized_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(\d{4})\s*[年/]\s*(\d{1,2})\s*[月/]\s*(\d{1,2})\s*日?").unwrap()
    })
}

fn time_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\d{1,2}):(\d{2})(?::(\d{2}))?").unwrap())
}

/// Naive ISO layouts accepted after RFC 3339 fails
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Normalize stored date text into an [`EntryDate`] in the system's local zone.
///
/// The localized long form is tried first, then generic timestamp layouts.
/// Never panics; anything unrecognized is [`EntryDate::Unparseable`].
///
/// # Examples
///
/// ```
/// use diarist::domain::date::{normalize, EntryDate};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(normalize("2024年3月15日星期五 14:30:05").day(), Some(day));
/// assert_eq!(normalize("2024-03-15T14:30:05").day(), Some(day));
/// assert_eq!(normalize("last tuesday"), EntryDate::Unparseable);
/// ```
pub fn normalize(raw: &str) -> EntryDate {
    normalize_in(raw, &Local)
}

/// Normalize stored date text, reading offset-bearing timestamps in `zone`.
///
/// Text without an offset is taken as wall-clock time in `zone` already.
///
/// # Examples
///
/// ```
/// use diarist::domain::date::normalize_in;
/// use chrono::{FixedOffset, NaiveDate};
///
/// let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
/// assert_eq!(
///     normalize_in("2025-01-16T23:00:00.000Z", &tokyo).day(),
///     NaiveDate::from_ymd_opt(2025, 1, 17)
/// );
/// ```
pub fn normalize_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> EntryDate {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return EntryDate::Unparseable;
    }

    if let Some(dt) = parse_localized(trimmed) {
        return EntryDate::Canonical(dt);
    }

    parse_timestamp(trimmed, zone).into()
}

/// Parse the localized long form, e.g. `2024年3月15日 下午2:30:05`
fn parse_localized(text: &str) -> Option<NaiveDateTime> {
    let captures = localized_regex().captures(text)?;
    let year: i32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let day: u32 = captures[3].parse().ok()?;

    // Text month is 1-based; from_ymd_opt validates it along with the day
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let rest = &text[captures.get(0)?.end()..];
    let time = parse_time_of_day(rest).unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time))
}

/// Pick up an optional `H:MM[:SS]` with a 12-hour marker if present
fn parse_time_of_day(rest: &str) -> Option<NaiveTime> {
    let captures = time_regex().captures(rest)?;
    let mut hour: u32 = captures[1].parse().ok()?;
    let minute: u32 = captures[2].parse().ok()?;
    let second: u32 = match captures.get(3) {
        Some(s) => s.as_str().parse().ok()?,
        None => 0,
    };

    let upper = rest.to_uppercase();
    let is_pm = rest.contains("下午") || rest.contains("晚上") || upper.contains("PM");
    let is_am = rest.contains("上午") || rest.contains("凌晨") || upper.contains("AM");
    if is_pm && hour < 12 {
        hour += 12;
    } else if is_am && hour == 12 {
        hour = 0;
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Generic timestamp parse: RFC 3339, naive ISO date-time, or bare date
fn parse_timestamp<Tz: TimeZone>(text: &str, zone: &Tz) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(zone).naive_local());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_localized_long_form() {
        assert_eq!(
            normalize("2024年3月15日星期五 14:30:05"),
            EntryDate::Canonical(ymd_hms(2024, 3, 15, 14, 30, 5))
        );
    }

    #[test]
    fn test_localized_single_digit_parts() {
        assert_eq!(
            normalize("2025年1月7日"),
            EntryDate::Canonical(ymd_hms(2025, 1, 7, 0, 0, 0))
        );
    }

    #[test]
    fn test_localized_slash_form() {
        assert_eq!(
            normalize("2024/12/31 23:59:59"),
            EntryDate::Canonical(ymd_hms(2024, 12, 31, 23, 59, 59))
        );
    }

    #[test]
    fn test_localized_afternoon_marker() {
        assert_eq!(
            normalize("2024年3月15日 下午2:30:05"),
            EntryDate::Canonical(ymd_hms(2024, 3, 15, 14, 30, 5))
        );
        assert_eq!(
            normalize("2024/3/15 12:10:00 AM"),
            EntryDate::Canonical(ymd_hms(2024, 3, 15, 0, 10, 0))
        );
    }

    #[test]
    fn test_localized_invalid_day_is_unparseable() {
        assert_eq!(normalize("2024年2月30日"), EntryDate::Unparseable);
        assert_eq!(normalize("2024年13月1日"), EntryDate::Unparseable);
    }

    fn east(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn test_rfc3339_shifts_into_zone() {
        assert_eq!(
            normalize_in("2024-03-15T23:30:00+05:00", &Utc),
            EntryDate::Canonical(ymd_hms(2024, 3, 15, 18, 30, 0))
        );
        assert_eq!(
            normalize_in("2024-03-15T23:30:00+05:00", &east(5)),
            EntryDate::Canonical(ymd_hms(2024, 3, 15, 23, 30, 0))
        );
        assert_eq!(
            normalize_in("2024-03-15T08:00:00.123Z", &Utc).day(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(
            normalize_in("2024-03-15T20:00:00Z", &east(-8)).day(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
    }

    #[test]
    fn test_same_instant_in_both_shapes_shares_a_day() {
        let tokyo = east(9);
        let localized = normalize_in("2025年1月17日 08:00:00", &tokyo);
        let utc_stamp = normalize_in("2025-01-16T23:00:00.000Z", &tokyo);
        assert_eq!(localized, utc_stamp);
        assert_eq!(utc_stamp.day(), NaiveDate::from_ymd_opt(2025, 1, 17));
    }

    #[test]
    fn test_zone_leaves_offsetless_text_alone() {
        for zone in [east(-11), east(0), east(13)] {
            assert_eq!(
                normalize_in("2024-03-15T08:01:02", &zone),
                EntryDate::Canonical(ymd_hms(2024, 3, 15, 8, 1, 2))
            );
            assert_eq!(
                normalize_in("2024年3月15日 下午2:30:05", &zone),
                EntryDate::Canonical(ymd_hms(2024, 3, 15, 14, 30, 5))
            );
        }
    }

    #[test]
    fn test_naive_iso_forms() {
        assert_eq!(
            normalize("2024-03-15T08:01:02"),
            EntryDate::Canonical(ymd_hms(2024, 3, 15, 8, 1, 2))
        );
        assert_eq!(
            normalize("2024-03-15 08:01"),
            EntryDate::Canonical(ymd_hms(2024, 3, 15, 8, 1, 0))
        );
        assert_eq!(
            normalize("  2024-03-15  "),
            EntryDate::Canonical(ymd_hms(2024, 3, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_garbage_is_unparseable() {
        assert_eq!(normalize(""), EntryDate::Unparseable);
        assert_eq!(normalize("   "), EntryDate::Unparseable);
        assert_eq!(normalize("yesterday"), EntryDate::Unparseable);
        assert_eq!(normalize("15/03/24"), EntryDate::Unparseable);
        assert_eq!(normalize("2024-02-30"), EntryDate::Unparseable);
    }

    #[test]
    fn test_accessors() {
        let parsed = normalize("2024-03-15");
        assert!(parsed.is_parseable());
        assert_eq!(parsed.day(), NaiveDate::from_ymd_opt(2024, 3, 15));

        let bad = normalize("nope");
        assert!(!bad.is_parseable());
        assert_eq!(bad.datetime(), None);
        assert_eq!(bad.day(), None);
    }
}
