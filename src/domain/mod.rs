//! Domain layer - Business logic and domain models

pub mod entry;
pub mod journal;
pub mod mood;
pub mod query;

pub use entry::Entry;
pub use journal::Journal;
pub use mood::{Mood, MoodLabel};
pub use query::MoodSummary;
