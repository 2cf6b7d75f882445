//! Journal entry record

use crate::domain::{Mood, MoodLabel};
use crate::error::{JournalError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format stamped on new entries (local time)
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single journal record. Fields are read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    date: String,
    mood: MoodLabel,
    text: String,
}

impl Entry {
    /// Build an entry, rejecting empty text
    pub fn new(date: impl Into<String>, mood: impl Into<MoodLabel>, text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(JournalError::Validation(
                "Entry text cannot be empty".to_string(),
            ));
        }

        Ok(Entry {
            date: date.into(),
            mood: mood.into(),
            text: text.to_string(),
        })
    }

    /// Build an entry stamped with the given moment
    pub fn stamped(at: DateTime<Local>, mood: Mood, text: &str) -> Result<Self> {
        Entry::new(at.format(DATE_FORMAT).to_string(), mood, text)
    }

    /// Build an entry stamped with the current local time
    pub fn now(mood: Mood, text: &str) -> Result<Self> {
        Entry::stamped(Local::now(), mood, text)
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn mood(&self) -> &MoodLabel {
        &self.mood
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
