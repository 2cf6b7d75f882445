//! Mood labels and their display symbols

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of moods an entry can be recorded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    /// All moods in canonical order
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Neutral, Mood::Sad];

    /// The label stored in the journal file
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
        }
    }

    /// Short emoticon shown next to the label
    pub fn symbol(&self) -> &'static str {
        match self {
            Mood::Happy => ":)",
            Mood::Neutral => ":|",
            Mood::Sad => ":(",
        }
    }

    /// Exact match against a stored label. Unlike `from_str` this does not
    /// normalize case or whitespace, so stored labels survive a round trip.
    pub fn from_label(label: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|m| m.label() == label)
    }

    /// "happy/neutral/sad", for prompts
    pub fn choices() -> String {
        Mood::ALL.map(|m| m.label()).join("/")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::from_label(s.trim().to_lowercase().as_str()).ok_or_else(|| {
            format!(
                "Please enter one of: {}",
                Mood::ALL.map(|m| m.label()).join(", ")
            )
        })
    }
}

/// Mood as stored on an entry.
///
/// Hand-edited files may contain labels outside the closed set; those are
/// kept verbatim so saving the journal never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MoodLabel {
    Known(Mood),
    Unrecognized(String),
}

impl MoodLabel {
    pub fn mood(&self) -> Option<Mood> {
        match self {
            MoodLabel::Known(mood) => Some(*mood),
            MoodLabel::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MoodLabel::Known(mood) => mood.label(),
            MoodLabel::Unrecognized(label) => label,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.mood().map_or("?", |m| m.symbol())
    }
}

impl From<Mood> for MoodLabel {
    fn from(mood: Mood) -> Self {
        MoodLabel::Known(mood)
    }
}

impl From<String> for MoodLabel {
    fn from(label: String) -> Self {
        match Mood::from_label(&label) {
            Some(mood) => MoodLabel::Known(mood),
            None => MoodLabel::Unrecognized(label),
        }
    }
}

impl From<MoodLabel> for String {
    fn from(label: MoodLabel) -> Self {
        match label {
            MoodLabel::Known(mood) => mood.label().to_string(),
            MoodLabel::Unrecognized(label) => label,
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
