//! Runtime configuration
//!
//! The journal location is fixed: `journal.json` in the directory daybook is
//! launched from. Nothing here is read from flags, files or the environment.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// File name of the persisted journal
pub const JOURNAL_FILE: &str = "journal.json";

/// Widest bar drawn by the mood summary
pub const SUMMARY_BAR_WIDTH: usize = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub journal_path: PathBuf,
    pub bar_width: usize,
}

impl Config {
    /// Config for a journal living in `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Config {
            journal_path: dir.join(JOURNAL_FILE),
            bar_width: SUMMARY_BAR_WIDTH,
        }
    }

    /// Config for the current working directory
    pub fn from_current_dir() -> Result<Self> {
        let dir = std::env::current_dir()?;
        Ok(Self::in_dir(&dir))
    }
}
