//! Read-only queries over journal entries
//!
//! Every function here borrows the entries and preserves their stored order.
//!
//! # Examples
//!
//! ```
//! use daybook::domain::{query, Entry, Mood};
//!
//! let entries = vec![
//!     Entry::new("2025-01-17 09:30", Mood::Happy, "Had a Great Day").unwrap(),
//!     Entry::new("2025-01-18 21:10", Mood::Sad, "rainy").unwrap(),
//! ];
//!
//! assert_eq!(query::search(&entries, "great").len(), 1);
//! assert_eq!(query::filter_by_mood(&entries, "sad").len(), 1);
//! assert_eq!(query::mood_summary(&entries).count(Mood::Happy), 1);
//! ```

use crate::domain::{Entry, Mood};
use std::collections::BTreeMap;

/// All entries in stored order
pub fn list_all(entries: &[Entry]) -> Vec<&Entry> {
    entries.iter().collect()
}

/// Entries whose mood equals `mood`. Labels outside the closed set match nothing.
pub fn filter_by_mood<'a>(entries: &'a [Entry], mood: &str) -> Vec<&'a Entry> {
    match Mood::from_label(mood) {
        Some(mood) => entries
            .iter()
            .filter(|e| e.mood().mood() == Some(mood))
            .collect(),
        None => Vec::new(),
    }
}

/// Case-insensitive substring search over entry text. An empty keyword matches nothing.
pub fn search<'a>(entries: &'a [Entry], keyword: &str) -> Vec<&'a Entry> {
    if keyword.is_empty() {
        return Vec::new();
    }

    let needle = keyword.to_lowercase();
    entries
        .iter()
        .filter(|e| e.text().to_lowercase().contains(&needle))
        .collect()
}

/// Tally of recognized moods across the journal
pub fn mood_summary(entries: &[Entry]) -> MoodSummary {
    let mut counts: BTreeMap<Mood, usize> = Mood::ALL.iter().map(|m| (*m, 0)).collect();

    for mood in entries.iter().filter_map(|e| e.mood().mood()) {
        *counts.entry(mood).or_insert(0) += 1;
    }

    MoodSummary {
        counts,
        total: entries.len(),
    }
}

/// Per-mood counts; every mood is always present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSummary {
    counts: BTreeMap<Mood, usize>,
    total: usize,
}

impl MoodSummary {
    pub fn count(&self, mood: Mood) -> usize {
        self.counts.get(&mood).copied().unwrap_or(0)
    }

    /// Number of entries tallied, including ones with unrecognized moods
    pub fn total(&self) -> usize {
        self.total
    }

    /// Counts in canonical mood order
    pub fn iter(&self) -> impl Iterator<Item = (Mood, usize)> + '_ {
        self.counts.iter().map(|(mood, count)| (*mood, *count))
    }

    pub fn largest_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Mood with the highest count; ties go to the earlier mood
    pub fn most_frequent(&self) -> Option<Mood> {
        let mut best: Option<(Mood, usize)> = None;
        for (mood, count) in self.iter() {
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((mood, count));
            }
        }
        best.map(|(mood, _)| mood)
    }

    /// Share of all entries, 0-100
    pub fn percent(&self, mood: Mood) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(mood) as f64 / self.total as f64 * 100.0
    }
}
