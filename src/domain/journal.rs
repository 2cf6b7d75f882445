//! Journal aggregate root

use crate::domain::Entry;

/// Ordered collection of entries; insertion order is creation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    pub fn new(entries: Vec<Entry>) -> Self {
        Journal { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the journal with `entry` added at the end. Does not persist.
    pub fn append(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }
}
