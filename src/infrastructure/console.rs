//! Console input as explicit events
//!
//! Lines typed by the user, end of input and Ctrl-C all arrive through the
//! same `InputSource`, so the menu can treat an interrupt as an ordinary
//! value instead of unwinding.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, warn};

/// One thing that can happen while waiting for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line of input, without its line terminator
    Line(String),
    /// Standard input reached end of file
    Closed,
    /// The user pressed Ctrl-C
    Interrupted,
}

/// Source of user input, blocking until the next event
pub trait InputSource {
    fn next_event(&mut self) -> InputEvent;
}

/// Standard input plus a Ctrl-C handler.
///
/// A reader thread forwards stdin lines into a channel; the signal handler
/// posts `Interrupted` into the same channel.
pub struct StdinInput {
    events: Receiver<InputEvent>,
}

impl StdinInput {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();

        let signal_tx = tx.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            let _ = signal_tx.send(InputEvent::Interrupted);
        }) {
            warn!(error = %e, "could not install Ctrl-C handler");
        }

        thread::spawn(move || forward_lines(io::stdin().lock(), tx));

        StdinInput { events: rx }
    }
}

impl InputSource for StdinInput {
    fn next_event(&mut self) -> InputEvent {
        self.events.recv().unwrap_or(InputEvent::Closed)
    }
}

fn forward_lines<R: BufRead>(reader: R, tx: Sender<InputEvent>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                if tx.send(InputEvent::Line(line)).is_err() {
                    return;
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to read from stdin");
                break;
            }
        }
    }
    debug!("stdin closed");
    let _ = tx.send(InputEvent::Closed);
}

/// Pre-recorded input, for driving the menu without a terminal
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    /// One `Line` event per item, followed by `Closed` once exhausted
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            events: lines.into_iter().map(|l| InputEvent::Line(l.into())).collect(),
        }
    }

    /// Append an arbitrary event
    pub fn then(mut self, event: InputEvent) -> Self {
        self.events.push_back(event);
        self
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> InputEvent {
        self.events.pop_front().unwrap_or(InputEvent::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_scripted_input_then_closed() {
        let mut input = ScriptedInput::lines(["1", "happy"]);
        assert_eq!(input.next_event(), InputEvent::Line("1".to_string()));
        assert_eq!(input.next_event(), InputEvent::Line("happy".to_string()));
        assert_eq!(input.next_event(), InputEvent::Closed);
        assert_eq!(input.next_event(), InputEvent::Closed);
    }

    #[test]
    fn test_scripted_interrupt() {
        let mut input = ScriptedInput::lines(["2"]).then(InputEvent::Interrupted);
        assert_eq!(input.next_event(), InputEvent::Line("2".to_string()));
        assert_eq!(input.next_event(), InputEvent::Interrupted);
    }

    #[test]
    fn test_forward_lines_strips_terminators() {
        let (tx, rx) = mpsc::channel();
        forward_lines(Cursor::new("first\r\nsecond\nlast"), tx);

        let events: Vec<InputEvent> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                InputEvent::Line("first".to_string()),
                InputEvent::Line("second".to_string()),
                InputEvent::Line("last".to_string()),
                InputEvent::Closed,
            ]
        );
    }
}
