//! daybook - Interactive mood journal
//!
//! A menu-driven terminal journal that appends dated, mood-tagged entries to
//! a local JSON file and can list, filter, search and summarize them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalError;
