//! Output formatting utilities

use crate::application::InsightsSummary;
use crate::domain::{
    nearest_rating, segment, CharacterTrendStats, DiaryEntry, FrequencyStats, Mood, MoodStats,
    SearchResults, StreakStats,
};

const BAR_WIDTH: usize = 30;
const TREND_ROWS: usize = 10;
const UNKNOWN_DATE: &str = "??-??-????";

/// Proportional bar; any non-zero value gets at least one block
fn bar(value: usize, max: usize) -> String {
    if value == 0 || max == 0 {
        return String::new();
    }
    let width = (value * BAR_WIDTH).div_ceil(max).clamp(1, BAR_WIDTH);
    "█".repeat(width)
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

fn entry_day(entry: &DiaryEntry) -> String {
    entry
        .normalized_date()
        .day()
        .map(|d| d.format("%d-%m-%Y").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Wrap keyword hits in brackets
fn highlight(text: &str, keyword: &str) -> String {
    segment(text, keyword)
        .into_iter()
        .map(|s| {
            if s.is_match {
                format!("[{}]", s.text)
            } else {
                s.text
            }
        })
        .collect()
}

/// Format search results in stored order, one block per entry
pub fn format_search_results(results: &SearchResults<'_>, keyword: &str, mark: bool) -> String {
    if results.results.is_empty() {
        return format!(
            "No entries found (searched {})",
            plural(results.total_count, "entry", "entries")
        );
    }

    let mut output = String::new();
    for entry in &results.results {
        let content = entry.content.split_whitespace().collect::<Vec<_>>().join(" ");
        let (title, content) = if mark {
            (highlight(&entry.title, keyword), highlight(&content, keyword))
        } else {
            (entry.title.clone(), content)
        };

        output.push_str(&format!("{}  {}\n", entry_day(entry), title));
        if !content.is_empty() {
            output.push_str(&format!("            {}\n", content));
        }
    }
    output.push_str(&format!(
        "\n{} of {} entries matched\n",
        results.match_count, results.total_count
    ));
    output
}

/// Format the mood distribution, highest rating first
pub fn format_mood_stats(stats: &MoodStats) -> String {
    if stats.total_rated == 0 {
        return "No rated entries".to_string();
    }

    let max = stats.per_rating.values().copied().max().unwrap_or(0);
    let mut output = String::new();
    for mood in Mood::ALL.iter().rev() {
        let count = stats.per_rating.get(mood).copied().unwrap_or(0);
        output.push_str(&format!(
            "{} {:<6} {:>4}  {}\n",
            mood.emoji(),
            mood.label(),
            count,
            bar(count, max)
        ));
    }

    let nearest = nearest_rating(stats.average)
        .map(|m| format!(" ({})", m))
        .unwrap_or_default();
    output.push_str(&format!(
        "\nRated: {}, average {:.2}{}\n",
        plural(stats.total_rated, "entry", "entries"),
        stats.average,
        nearest
    ));
    if let Some(mood) = stats.dominant() {
        output.push_str(&format!(
            "Most common: {} ({:.0}% of rated)\n",
            mood,
            stats.share(mood) * 100.0
        ));
    }
    output
}

/// Format the frequency histogram: weekly and monthly buckets plus totals
pub fn format_frequency(stats: &FrequencyStats) -> String {
    let days = stats.daily.len();
    let mut output = format!(
        "Last {}: {} (lifetime total {}, {:.2} per day)\n",
        plural(days, "day", "days"),
        plural(stats.windowed_posts(), "post", "posts"),
        stats.total_posts,
        stats.average_per_day
    );

    if let Some((day, count)) = stats.busiest_day() {
        output.push_str(&format!(
            "Busiest day: {} ({})\n",
            day.format("%d-%m-%Y"),
            plural(count, "post", "posts")
        ));
    }

    output.push_str("\nWeekly\n");
    let week_max = stats.weekly.values().copied().max().unwrap_or(0);
    for (week, count) in &stats.weekly {
        output.push_str(&format!("{:<9} {:>4}  {}\n", week, count, bar(*count, week_max)));
    }

    output.push_str("\nMonthly\n");
    let month_max = stats.monthly.values().copied().max().unwrap_or(0);
    for (month, count) in &stats.monthly {
        output.push_str(&format!("{:<9} {:>4}  {}\n", month, count, bar(*count, month_max)));
    }

    if stats.undated_posts > 0 {
        output.push_str(&format!(
            "\n{} with unreadable dates not charted\n",
            plural(stats.undated_posts, "entry", "entries")
        ));
    }
    output
}

/// Format the writing-volume trend, showing the most recent rows
pub fn format_trend(stats: &CharacterTrendStats) -> String {
    if stats.series.is_empty() {
        return "No dated entries".to_string();
    }

    let shown = &stats.series[stats.series.len().saturating_sub(TREND_ROWS)..];
    let mut output = String::new();
    for point in shown {
        output.push_str(&format!(
            "{}  {:>6}  {}  {}\n",
            point.date.format("%d-%m-%Y"),
            point.char_count,
            bar(point.char_count, stats.max),
            point.title
        ));
    }

    let direction = if stats.is_trending_up() {
        "up"
    } else {
        "flat or down"
    };
    output.push_str(&format!(
        "\nAverage {:.1} chars, max {}, min {}, recent average {:.1} (trending {})\n",
        stats.average, stats.max, stats.min, stats.recent_average, direction
    ));
    output
}

/// Format streak figures
pub fn format_streak(stats: &StreakStats) -> String {
    let last = stats
        .last_post_day
        .map(|d| d.format("%d-%m-%Y").to_string())
        .unwrap_or_else(|| "never".to_string());

    format!(
        "Current streak: {}\nLongest streak: {}\nDays posted: {}\nLast post: {}\n",
        plural(stats.current_streak, "day", "days"),
        plural(stats.max_streak, "day", "days"),
        stats.total_days_posted,
        last
    )
}

/// Format every statistic under section headings
pub fn format_summary(summary: &InsightsSummary) -> String {
    format!(
        "Entries: {}\n\n== Streak ==\n{}\n== Moods ==\n{}\n\n== Frequency ==\n{}\n== Trend ==\n{}\n",
        summary.total_entries,
        format_streak(&summary.streak),
        format_mood_stats(&summary.moods).trim_end(),
        format_frequency(&summary.frequency),
        format_trend(&summary.trend).trim_end()
    )
}
