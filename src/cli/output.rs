//! Output formatting utilities

use crate::domain::{Entry, Mood, MoodSummary};

/// Main menu, printed before every choice
pub const MENU: &str = "\
================================
         DAILY JOURNAL
================================
  1. Add new entry
  2. View all entries
  3. View entries by mood
  4. Mood summary
  5. Search by keyword
  6. Quit
================================";

const RULE_WIDTH: usize = 44;

/// Format one entry, numbered from 1
pub fn format_entry(entry: &Entry, index: usize) -> String {
    format!(
        "\n  [{}] {}   Mood: {} {}\n      {}\n      {}\n",
        index,
        entry.date(),
        entry.mood(),
        entry.mood().symbol(),
        entry.text(),
        "─".repeat(RULE_WIDTH)
    )
}

/// Format a header followed by the numbered entries
pub fn format_entry_list(header: &str, entries: &[&Entry]) -> String {
    let mut output = format!("\n{}\n", header);
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format_entry(entry, i + 1));
    }
    output
}

/// Length of the bar drawn for `count` when the biggest bar is `largest`.
///
/// Counts are drawn one `#` each while they fit in `width`; beyond that bars
/// scale down to the largest count. A nonzero count never draws an empty bar.
pub fn bar_length(count: usize, largest: usize, width: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if largest <= width {
        return count;
    }
    (count * width / largest).max(1)
}

/// Format the mood summary as a bar chart
pub fn format_mood_summary(summary: &MoodSummary, width: usize) -> String {
    let mut output = format!("\n=== Mood Summary ({} entries) ===\n", summary.total());
    let largest = summary.largest_count();

    for (mood, count) in summary.iter() {
        let bar = "#".repeat(bar_length(count, largest, width));
        output.push_str(&format!(
            "  {:<8} {}  {:<width$} {:>3} ({:.0}%)\n",
            mood.label(),
            mood.symbol(),
            bar,
            count,
            summary.percent(mood),
            width = width
        ));
    }

    if let Some(top) = summary.most_frequent() {
        output.push_str(&format!("\n  Most frequent mood: {} {}\n", top, top.symbol()));
    }

    output
}

/// "Happy", for headers
pub fn capitalize(mood: Mood) -> String {
    let label = mood.label();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "1 entry" / "3 entries"
pub fn entries_noun(count: usize) -> &'static str {
    if count == 1 {
        "entry"
    } else {
        "entries"
    }
}
