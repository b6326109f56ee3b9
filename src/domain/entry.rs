//! Diary entry model as it appears in the persisted journal document

use super::date::{self, EntryDate};
use super::mood::Mood;
use serde::{Deserialize, Serialize};

/// A single journal entry.
///
/// Entries are owned by whoever persists the journal; the analytics engines
/// only ever borrow them. Every field but `id` tolerates being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Creation time as stored; either a localized long form or ISO-8601
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<serde_json::Value>,
}

impl DiaryEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        DiaryEntry {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            date: String::new(),
            mood: None,
            images: None,
            attachments: None,
        }
    }

    /// Builder-style setter for the stored date text
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Builder-style setter for the mood rating
    pub fn with_mood(mut self, mood: u8) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Normalized creation time of this entry
    pub fn normalized_date(&self) -> EntryDate {
        date::normalize(&self.date)
    }

    /// Mood rating, if one is set and within 1..=5
    pub fn rating(&self) -> Option<Mood> {
        self.mood.and_then(|m| Mood::try_from(m).ok())
    }
}

/// Top-level shape of the persisted journal document (`{ "entries": [...] }`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryDocument {
    #[serde(default)]
    pub entries: Vec<DiaryEntry>,
}
