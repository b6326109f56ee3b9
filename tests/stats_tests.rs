//! Integration tests for the statistics commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{days_ago, diarist_cmd, entry, init_journal, rated_entry, write_entries};

fn json_output(dir: &std::path::Path, args: &[&str]) -> serde_json::Value {
    let output = diarist_cmd()
        .current_dir(dir)
        .arg("--json")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_moods_empty_journal() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    diarist_cmd()
        .current_dir(temp.path())
        .arg("moods")
        .assert()
        .success()
        .stdout(predicate::str::contains("No rated entries"));
}

#[test]
fn test_moods_distribution() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    write_entries(
        temp.path(),
        vec![
            rated_entry("1", "a", "b", "2025-01-10", 5),
            rated_entry("2", "a", "b", "2025-01-11", 4),
            rated_entry("3", "a", "b", "not a date", 4),
            entry("4", "a", "b", "2025-01-12"),
        ],
    );

    diarist_cmd()
        .current_dir(temp.path())
        .arg("moods")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rated: 3 entries, average 4.33 (🙂 good)"))
        .stdout(predicate::str::contains("Most common: 🙂 good (67% of rated)"));

    let json = json_output(temp.path(), &["moods"]);
    assert_eq!(json["total_rated"], 3);
    assert_eq!(json["per_rating"]["good"], 2);
    assert_eq!(json["per_rating"]["awful"], 0);
}

#[test]
fn test_streak_three_days_ending_today() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    write_entries(
        temp.path(),
        vec![
            entry("1", "a", "b", &days_ago(2)),
            entry("2", "a", "b", &days_ago(1)),
            entry("3", "a", "b", &days_ago(0)),
        ],
    );

    diarist_cmd()
        .current_dir(temp.path())
        .arg("streak")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 3 days"))
        .stdout(predicate::str::contains("Longest streak: 3 days"))
        .stdout(predicate::str::contains("Days posted: 3"));
}

#[test]
fn test_streak_broken_by_gap() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    write_entries(
        temp.path(),
        vec![
            entry("1", "a", "b", &days_ago(3)),
            entry("2", "a", "b", &days_ago(2)),
            entry("3", "a", "b", &days_ago(0)),
        ],
    );

    let json = json_output(temp.path(), &["streak"]);
    assert_eq!(json["max_streak"], 2);
    assert_eq!(json["current_streak"], 1);
    assert_eq!(json["total_days_posted"], 3);
}

#[test]
fn test_frequency_ten_days_plus_old_entries() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    let mut entries: Vec<serde_json::Value> = (0..10)
        .map(|n| entry(&n.to_string(), "a", "b", &days_ago(n)))
        .collect();
    entries.push(entry("old1", "a", "b", &days_ago(100)));
    entries.push(entry("old2", "a", "b", &days_ago(400)));
    write_entries(temp.path(), entries);

    let json = json_output(temp.path(), &["frequency"]);
    let daily = json["daily"].as_object().unwrap();
    assert_eq!(daily.len(), 31);
    let windowed: u64 = daily.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(windowed, 10);
    assert_eq!(json["total_posts"], 12);

    diarist_cmd()
        .current_dir(temp.path())
        .arg("frequency")
        .arg("--days")
        .arg("6")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Last 7 days: 7 posts (lifetime total 12, 1.71 per day)",
        ))
        .stdout(predicate::str::contains("Weekly"))
        .stdout(predicate::str::contains("Monthly"));
}

#[test]
fn test_frequency_respects_configured_window() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    diarist_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("window_days")
        .arg("3")
        .assert()
        .success();

    let json = json_output(temp.path(), &["frequency"]);
    assert_eq!(json["daily"].as_object().unwrap().len(), 4);
    assert_eq!(json["average_per_day"], 0.0);
}

#[test]
fn test_config_rejects_oversized_window() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    diarist_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("window_days")
        .arg("4294967295")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("from 0 to 3660"));

    diarist_cmd()
        .current_dir(temp.path())
        .arg("frequency")
        .arg("--days")
        .arg("4294967295")
        .assert()
        .failure();
}

#[test]
fn test_hand_edited_window_is_clamped() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let config_path = temp.path().join(".diarist").join("config.toml");
    let config = std::fs::read_to_string(&config_path).unwrap();
    let edited: String = config
        .lines()
        .map(|line| {
            if line.starts_with("window_days") {
                "window_days = 4294967295".to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(&config_path, edited).unwrap();

    let json = json_output(temp.path(), &["frequency"]);
    assert_eq!(json["daily"].as_object().unwrap().len(), 3661);
}

#[test]
fn test_trend() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    write_entries(
        temp.path(),
        vec![
            entry("1", "AB", "CDE", "2025-01-12T09:00:00"),
            entry("2", "First", "x", "2025年1月3日 08:00:00"),
            entry("3", "Skipped", "undated", ""),
        ],
    );

    let json = json_output(temp.path(), &["trend"]);
    let series = json["series"].as_array().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["title"], "First");
    assert_eq!(series[1]["char_count"], 5);
    assert_eq!(json["max"], 6);
    assert_eq!(json["min"], 5);

    diarist_cmd()
        .current_dir(temp.path())
        .arg("trend")
        .assert()
        .success()
        .stdout(predicate::str::contains("03-01-2025"))
        .stdout(predicate::str::contains("max 6, min 5"));
}

#[test]
fn test_stats_summary() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    write_entries(
        temp.path(),
        vec![
            rated_entry("1", "Today", "Sunny", &days_ago(0), 5),
            rated_entry("2", "Yesterday", "Cloudy", &days_ago(1), 3),
        ],
    );

    diarist_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries: 2"))
        .stdout(predicate::str::contains("== Streak =="))
        .stdout(predicate::str::contains("Current streak: 2 days"))
        .stdout(predicate::str::contains("== Moods =="))
        .stdout(predicate::str::contains("average 4.00"))
        .stdout(predicate::str::contains("== Frequency =="))
        .stdout(predicate::str::contains("== Trend =="));

    let json = json_output(temp.path(), &["stats"]);
    assert_eq!(json["total_entries"], 2);
    assert_eq!(json["streak"]["current_streak"], 2);
    assert_eq!(json["moods"]["average"], 4.0);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    write_entries(temp.path(), vec![entry("1", "a", "b", "garbage")]);

    let output = diarist_cmd()
        .current_dir(temp.path())
        .arg("--verbose")
        .arg("--json")
        .arg("frequency")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["undated_posts"], 1);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unparseable date"));
}
