//! Journal session: the in-memory journal tied to its store
//!
//! The session is loaded once at startup and saved in full after every
//! mutation. It owns both halves so callers never hold loose global state.

use crate::domain::{Entry, Journal};
use crate::error::{JournalError, Result};
use crate::infrastructure::JournalRepository;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct JournalSession<R: JournalRepository> {
    repository: R,
    journal: Journal,
    /// The store held unreadable data when the session started
    corrupt_on_disk: bool,
    /// Copy of the unreadable store, until a save reports it
    backup: Option<PathBuf>,
    /// In-memory entries not yet written
    unsaved: bool,
}

/// What a successful save did besides writing the journal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    /// Where an unreadable journal was copied before being replaced
    pub backup: Option<PathBuf>,
}

impl<R: JournalRepository> JournalSession<R> {
    /// Load the journal from `repository`.
    ///
    /// A corrupt store is not fatal: the session starts empty and the error
    /// comes back as a warning for the caller to show. Other read failures
    /// are returned as errors.
    pub fn open(repository: R) -> Result<(Self, Option<JournalError>)> {
        let (entries, warning) = match repository.load() {
            Ok(entries) => (entries, None),
            Err(e @ JournalError::CorruptStore { .. }) => {
                warn!(error = %e, "starting with an empty journal");
                (Vec::new(), Some(e))
            }
            Err(e) => return Err(e),
        };

        let session = JournalSession {
            repository,
            journal: Journal::new(entries),
            corrupt_on_disk: warning.is_some(),
            backup: None,
            unsaved: false,
        };

        Ok((session, warning))
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn entries(&self) -> &[Entry] {
        self.journal.entries()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Where the unreadable store was copied, if that happened before a failed save
    pub fn pending_backup(&self) -> Option<&Path> {
        self.backup.as_deref()
    }

    /// Append `entry` and save the whole journal.
    ///
    /// The entry stays in memory even if saving fails; the next save writes it.
    pub fn add(&mut self, entry: Entry) -> Result<SaveReport> {
        self.journal = std::mem::take(&mut self.journal).append(entry);
        self.unsaved = true;
        self.save()
    }

    /// Write the whole journal to the store
    pub fn save(&mut self) -> Result<SaveReport> {
        if self.corrupt_on_disk {
            self.backup = Some(self.repository.preserve_corrupt()?);
            self.corrupt_on_disk = false;
        }

        self.repository.save(self.journal.entries())?;
        self.unsaved = false;
        debug!(count = self.journal.len(), "journal saved");

        Ok(SaveReport {
            backup: self.backup.take(),
        })
    }
}
