//! File system journal store

use crate::domain::Entry;
use crate::error::{JournalError, Result};
use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Abstract store for the whole journal collection
pub trait JournalRepository {
    /// Read every entry. A missing or empty store is an empty journal.
    fn load(&self) -> Result<Vec<Entry>>;

    /// Replace the stored collection with `entries`
    fn save(&self, entries: &[Entry]) -> Result<()>;

    /// Copy an unreadable store aside so a later save cannot destroy it.
    /// Returns where the copy went.
    fn preserve_corrupt(&self) -> Result<PathBuf>;
}

/// JSON file implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    path: PathBuf,
}

impl FileSystemRepository {
    /// Create a repository backed by the file at `path`
    pub fn new(path: PathBuf) -> Self {
        FileSystemRepository { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path used while writing
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".corrupt-{}", Local::now().format("%Y%m%d%H%M%S")));
        self.path.with_file_name(name)
    }
}

impl JournalRepository for FileSystemRepository {
    fn load(&self) -> Result<Vec<Entry>> {
        // Raw bytes, so undecodable text is reported as a corrupt store
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no journal file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(JournalError::Io(e)),
        };

        if contents.iter().all(u8::is_ascii_whitespace) {
            debug!(path = %self.path.display(), "journal file is empty");
            return Ok(Vec::new());
        }

        let entries: Vec<Entry> =
            serde_json::from_slice(&contents).map_err(|source| JournalError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = entries.len(), "loaded journal");
        Ok(entries)
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| JournalError::Io(e.into()))?;

        // Write a sibling file and rename it over the journal
        let tmp = self.temp_path();
        if let Err(e) = fs::write(&tmp, contents).and_then(|_| fs::rename(&tmp, &self.path)) {
            warn!(path = %self.path.display(), error = %e, "failed to save journal");
            let _ = fs::remove_file(&tmp);
            return Err(JournalError::Io(e));
        }

        debug!(path = %self.path.display(), count = entries.len(), "saved journal");
        Ok(())
    }

    fn preserve_corrupt(&self) -> Result<PathBuf> {
        let backup = self.backup_path();
        fs::copy(&self.path, &backup)?;
        warn!(
            path = %self.path.display(),
            backup = %backup.display(),
            "copied corrupted journal aside"
        );
        Ok(backup)
    }
}
