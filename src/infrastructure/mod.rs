//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod console;
pub mod repository;

pub use config::Config;
pub use console::{InputEvent, InputSource, ScriptedInput, StdinInput};
pub use repository::{FileSystemRepository, JournalRepository};
