//! Error types for daybook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daybook
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Journal file is corrupted: {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Interrupted")]
    Interrupted,

    #[error("Input closed")]
    InputClosed,
}

impl JournalError {
    /// Get the exit code for this error.
    ///
    /// Corrupt stores, interrupts and end of input are handled inside the
    /// session, so in practice only `Io` reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::Interrupted | JournalError::InputClosed => 0,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::CorruptStore { path, source } => {
                format!(
                    "Journal file is corrupted: {} ({})\n\n\
                    Starting with an empty journal. The file was left untouched:\n\
                    • Fix the JSON by hand and restart daybook\n\
                    • A copy is kept next to it before anything new is saved",
                    path.display(),
                    source
                )
            }
            JournalError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the permissions of journal.json and its directory\n\
                    • Run daybook from a directory you can write to",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
