//! Application layer - Use cases and orchestration

pub mod menu;
pub mod session;

pub use menu::{start, Exit, Menu, MenuChoice, MenuState};
pub use session::{JournalSession, SaveReport};
