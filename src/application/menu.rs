//! Interactive menu controller
//!
//! A read-evaluate-print state machine: wait for a choice, run the chosen
//! operation, come back. Interrupts and end of input arrive as
//! `JournalError::Interrupted` / `JournalError::InputClosed` from `prompt`
//! and end the loop from whatever state it is in.

use crate::application::session::JournalSession;
use crate::cli::output::{
    capitalize, entries_noun, format_entry_list, format_mood_summary, MENU,
};
use crate::domain::{query, Entry, Mood};
use crate::error::{JournalError, Result};
use crate::infrastructure::{InputEvent, InputSource, JournalRepository};
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    RunningAdd,
    RunningView,
    RunningFilter,
    RunningSummary,
    RunningSearch,
    Terminated,
}

/// A validated menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Filter,
    Summary,
    Search,
    Quit,
}

impl MenuChoice {
    /// State the controller moves to for this choice
    pub fn target(self) -> MenuState {
        match self {
            MenuChoice::Add => MenuState::RunningAdd,
            MenuChoice::View => MenuState::RunningView,
            MenuChoice::Filter => MenuState::RunningFilter,
            MenuChoice::Summary => MenuState::RunningSummary,
            MenuChoice::Search => MenuState::RunningSearch,
            MenuChoice::Quit => MenuState::Terminated,
        }
    }
}

impl FromStr for MenuChoice {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::View),
            "3" => Ok(MenuChoice::Filter),
            "4" => Ok(MenuChoice::Summary),
            "5" => Ok(MenuChoice::Search),
            "6" => Ok(MenuChoice::Quit),
            _ => Err(JournalError::Validation(
                "Invalid choice. Enter a number from 1 to 6.".to_string(),
            )),
        }
    }
}

/// How a menu session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    Interrupted,
    InputClosed,
}

pub struct Menu<'a, R: JournalRepository, I: InputSource, W: Write> {
    session: &'a mut JournalSession<R>,
    input: I,
    out: W,
    bar_width: usize,
    state: MenuState,
}

impl<'a, R: JournalRepository, I: InputSource, W: Write> Menu<'a, R, I, W> {
    pub fn new(session: &'a mut JournalSession<R>, input: I, out: W, bar_width: usize) -> Self {
        Menu {
            session,
            input,
            out,
            bar_width,
            state: MenuState::AwaitingChoice,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Loop until the user quits, interrupts, or input runs out.
    ///
    /// Only failures writing to `out` are returned as errors.
    pub fn run(&mut self) -> Result<Exit> {
        while self.state != MenuState::Terminated {
            if let Err(e) = self.step() {
                let exit = match e {
                    JournalError::Interrupted => Exit::Interrupted,
                    JournalError::InputClosed => Exit::InputClosed,
                    other => return Err(other),
                };
                debug!(from = ?self.state, ?exit, "menu terminated");
                self.state = MenuState::Terminated;
                writeln!(self.out, "\nGoodbye!")?;
                self.warn_unsaved()?;
                return Ok(exit);
            }
        }

        Ok(Exit::Quit)
    }

    /// Run the current state once and move to the next one
    pub fn step(&mut self) -> Result<()> {
        let next = match self.state {
            MenuState::AwaitingChoice => self.await_choice()?,
            MenuState::RunningAdd => {
                self.add_entry()?;
                MenuState::AwaitingChoice
            }
            MenuState::RunningView => {
                self.view_all()?;
                MenuState::AwaitingChoice
            }
            MenuState::RunningFilter => {
                self.view_by_mood()?;
                MenuState::AwaitingChoice
            }
            MenuState::RunningSummary => {
                self.summary()?;
                MenuState::AwaitingChoice
            }
            MenuState::RunningSearch => {
                self.search()?;
                MenuState::AwaitingChoice
            }
            MenuState::Terminated => MenuState::Terminated,
        };

        debug!(from = ?self.state, to = ?next, "menu transition");
        self.state = next;
        Ok(())
    }

    fn await_choice(&mut self) -> Result<MenuState> {
        writeln!(self.out, "\n{}", MENU)?;
        let answer = self.prompt("Choose an option (1-6): ")?;

        match answer.parse::<MenuChoice>() {
            Ok(MenuChoice::Quit) => {
                writeln!(self.out, "Goodbye! Keep journaling.")?;
                self.warn_unsaved()?;
                Ok(MenuState::Terminated)
            }
            Ok(choice) => Ok(choice.target()),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(MenuState::AwaitingChoice)
            }
        }
    }

    fn add_entry(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- New Entry ---")?;
        let mood = self.prompt_mood(&format!("Mood ({}): ", Mood::choices()))?;

        let entry = loop {
            let text = self.prompt("Write your entry:\n> ")?;
            match Entry::now(mood, &text) {
                Ok(entry) => break entry,
                Err(JournalError::Validation(msg)) => {
                    writeln!(self.out, "  {}. Please write something.", msg)?
                }
                Err(e) => return Err(e),
            }
        };
        let saved_line = format!(
            "Saved! [{}]  Mood: {} {}",
            entry.date(),
            mood,
            mood.symbol()
        );

        match self.session.add(entry) {
            Ok(report) => {
                if let Some(backup) = report.backup {
                    writeln!(
                        self.out,
                        "The unreadable journal was copied to {}",
                        backup.display()
                    )?;
                }
                writeln!(self.out, "{}", saved_line)?;
            }
            Err(e) => {
                warn!(error = %e, "entry kept in memory only");
                writeln!(
                    self.out,
                    "Error saving journal: {}",
                    e.display_with_suggestions()
                )?;
                if let Some(backup) = self.session.pending_backup() {
                    writeln!(
                        self.out,
                        "The unreadable journal was copied to {}",
                        backup.display()
                    )?;
                }
                writeln!(
                    self.out,
                    "The entry is kept for this session and will be saved with your next entry."
                )?;
            }
        }

        Ok(())
    }

    fn view_all(&mut self) -> Result<()> {
        let entries = self.session.entries();
        let output = if entries.is_empty() {
            "\nNo entries yet. Start writing!\n".to_string()
        } else {
            format_entry_list(
                &format!("=== All Entries ({} total) ===", entries.len()),
                &query::list_all(entries),
            )
        };
        self.out.write_all(output.as_bytes())?;
        Ok(())
    }

    fn view_by_mood(&mut self) -> Result<()> {
        if self.session.journal().is_empty() {
            writeln!(self.out, "\nNo entries yet.")?;
            return Ok(());
        }

        let mood = self.prompt_mood(&format!("\nFilter by mood ({}): ", Mood::choices()))?;
        let matches = query::filter_by_mood(self.session.entries(), mood.label());

        let output = if matches.is_empty() {
            format!("No '{}' entries found.\n", mood)
        } else {
            format_entry_list(
                &format!(
                    "=== {} {} Entries ({} found) ===",
                    capitalize(mood),
                    mood.symbol(),
                    matches.len()
                ),
                &matches,
            )
        };
        self.out.write_all(output.as_bytes())?;
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        let entries = self.session.entries();
        let output = if entries.is_empty() {
            "\nNo entries yet.\n".to_string()
        } else {
            format_mood_summary(&query::mood_summary(entries), self.bar_width)
        };
        self.out.write_all(output.as_bytes())?;
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        if self.session.journal().is_empty() {
            writeln!(self.out, "\nNo entries yet.")?;
            return Ok(());
        }

        let keyword = self.prompt("\nSearch keyword: ")?.trim().to_string();
        if keyword.is_empty() {
            writeln!(self.out, "No keyword entered.")?;
            return Ok(());
        }

        let matches = query::search(self.session.entries(), &keyword);
        let output = if matches.is_empty() {
            format!("No entries found containing '{}'.\n", keyword)
        } else {
            format_entry_list(
                &format!("=== Search: '{}' ({} found) ===", keyword, matches.len()),
                &matches,
            )
        };
        self.out.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Show `text` and wait for the next line
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        match self.input.next_event() {
            InputEvent::Line(line) => Ok(line),
            InputEvent::Closed => Err(JournalError::InputClosed),
            InputEvent::Interrupted => Err(JournalError::Interrupted),
        }
    }

    /// Prompt until the answer names a mood
    fn prompt_mood(&mut self, text: &str) -> Result<Mood> {
        loop {
            let answer = self.prompt(text)?;
            match answer.parse::<Mood>() {
                Ok(mood) => return Ok(mood),
                Err(msg) => writeln!(self.out, "  {}", msg)?,
            }
        }
    }

    fn warn_unsaved(&mut self) -> Result<()> {
        if self.session.has_unsaved_changes() {
            writeln!(
                self.out,
                "Warning: some entries from this session could not be saved."
            )?;
        }
        Ok(())
    }
}

/// Open the journal, greet the user and run the menu until it ends
pub fn start<R, I, W>(repository: R, input: I, mut out: W, bar_width: usize) -> Result<Exit>
where
    R: JournalRepository,
    I: InputSource,
    W: Write,
{
    writeln!(out, "Welcome to your Daily Journal!")?;

    let (mut session, warning) = JournalSession::open(repository)?;
    if let Some(warning) = warning {
        writeln!(out, "Warning: {}", warning.display_with_suggestions())?;
    }

    let count = session.journal().len();
    writeln!(out, "({} existing {} loaded)", count, entries_noun(count))?;

    Menu::new(&mut session, input, out, bar_width).run()
}
