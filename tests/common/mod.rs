#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{Duration, Local, NaiveDate};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

pub fn diarist_cmd() -> Command {
    let mut cmd = Command::cargo_bin("diarist").unwrap();
    cmd.env_remove("DIARIST_ROOT");
    cmd.env_remove("DIARIST_LOG");
    cmd
}

/// Initialize a journal in `dir` through the binary
pub fn init_journal(dir: &Path) {
    diarist_cmd().arg("init").arg(dir).assert().success();
}

/// Overwrite the journal's data file with the given entries
pub fn write_entries(dir: &Path, entries: Vec<Value>) {
    let document = json!({ "entries": entries });
    fs::write(
        dir.join("diary.json"),
        serde_json::to_string_pretty(&document).unwrap(),
    )
    .unwrap();
}

pub fn entry(id: &str, title: &str, content: &str, date: &str) -> Value {
    json!({ "id": id, "title": title, "content": content, "date": date })
}

pub fn rated_entry(id: &str, title: &str, content: &str, date: &str, mood: u8) -> Value {
    json!({ "id": id, "title": title, "content": content, "date": date, "mood": mood })
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// ISO timestamp at noon, `days_ago` days before today
pub fn days_ago(days_ago: i64) -> String {
    (today() - Duration::days(days_ago))
        .format("%Y-%m-%dT12:00:00")
        .to_string()
}
