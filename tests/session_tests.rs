//! Integration tests driving the interactive menu through stdin

#![allow(deprecated)]

use chrono::Local;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::daybook_cmd;

fn journal(temp: &TempDir) -> serde_json::Value {
    let content = fs::read_to_string(temp.path().join("journal.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_first_run_starts_empty() {
    let temp = TempDir::new().unwrap();

    daybook_cmd()
        .current_dir(temp.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to your Daily Journal!"))
        .stdout(predicate::str::contains("(0 existing entries loaded)"))
        .stdout(predicate::str::contains("Goodbye! Keep journaling."));

    // Nothing was added, so nothing is written
    assert!(!temp.path().join("journal.json").exists());
}

#[test]
fn test_add_view_filter_and_relaunch() {
    let temp = TempDir::new().unwrap();
    let today = Local::now().format("%Y-%m-%d").to_string();

    daybook_cmd()
        .current_dir(temp.path())
        .write_stdin("1\nhappy\nfirst day\n2\n3\nsad\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved! ["))
        .stdout(predicate::str::contains("=== All Entries (1 total) ==="))
        .stdout(predicate::str::contains("Mood: happy :)"))
        .stdout(predicate::str::contains("No 'sad' entries found."));

    let stored = journal(&temp);
    let entries = stored.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["mood"], "happy");
    assert_eq!(entries[0]["text"], "first day");
    assert!(entries[0]["date"].as_str().unwrap().starts_with(&today));

    daybook_cmd()
        .current_dir(temp.path())
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 existing entry loaded)"))
        .stdout(predicate::str::contains("first day"))
        .stdout(predicate::str::contains(today));
}

#[test]
fn test_entries_append_in_order() {
    let temp = TempDir::new().unwrap();

    for (mood, text) in [("sad", "one"), ("neutral", "two"), ("happy", "three")] {
        daybook_cmd()
            .current_dir(temp.path())
            .write_stdin(format!("1\n{}\n{}\n6\n", mood, text))
            .assert()
            .success();
    }

    let stored = journal(&temp);
    let texts: Vec<&str> = stored
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn test_invalid_choice_returns_to_menu() {
    let temp = TempDir::new().unwrap();

    daybook_cmd()
        .current_dir(temp.path())
        .write_stdin("9\nabc\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Enter a number from 1 to 6."))
        .stdout(predicate::str::contains("Goodbye! Keep journaling."));

    assert!(!temp.path().join("journal.json").exists());
}

#[test]
fn test_end_of_input_is_graceful() {
    let temp = TempDir::new().unwrap();

    daybook_cmd()
        .current_dir(temp.path())
        .write_stdin("1\nhappy\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("Saved!").not());

    assert!(!temp.path().join("journal.json").exists());
}

#[test]
fn test_summary_bar_chart() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("journal.json"),
        r#"[
  {"date": "2025-01-17 09:30", "mood": "happy", "text": "a"},
  {"date": "2025-01-18 09:30", "mood": "happy", "text": "b"},
  {"date": "2025-01-19 09:30", "mood": "sad", "text": "c"},
  {"date": "2025-01-20 09:30", "mood": "happy", "text": "d"}
]"#,
    )
    .unwrap();

    daybook_cmd()
        .current_dir(temp.path())
        .write_stdin("4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Mood Summary (4 entries) ==="))
        .stdout(predicate::str::contains("  happy    :)  ###  "))
        .stdout(predicate::str::contains("  3 (75%)"))
        .stdout(predicate::str::contains("  0 (0%)"))
        .stdout(predicate::str::contains("Most frequent mood: happy :)"));
}

#[test]
fn test_corrupt_journal_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("journal.json");
    fs::write(&path, "this is not json").unwrap();

    daybook_cmd()
        .current_dir(temp.path())
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Journal file is corrupted"))
        .stdout(predicate::str::contains("No entries yet. Start writing!"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "this is not json");
}

#[test]
fn test_undecodable_journal_is_treated_as_corrupt() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("journal.json");
    let bytes = b"[{\"date\":\"x\",\"mood\":\"happy\",\"text\":\"\xff\xfe\"}]";
    fs::write(&path, bytes).unwrap();

    daybook_cmd()
        .current_dir(temp.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Journal file is corrupted"))
        .stdout(predicate::str::contains("(0 existing entries loaded)"))
        .stdout(predicate::str::contains("Goodbye! Keep journaling."));

    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[cfg(unix)]
#[test]
fn test_ctrl_c_at_menu_says_goodbye() {
    use std::io::Read;
    use std::process::{Command, Stdio};
    use std::time::{Duration, Instant};

    let temp = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_daybook"))
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Keep stdin open so the menu is blocked waiting for a choice
    let stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    let prompt = "Choose an option (1-6): ";
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut seen = Vec::new();
    let mut buf = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains(prompt) {
        assert!(Instant::now() < deadline, "menu prompt never appeared");
        let n = stdout.read(&mut buf).unwrap();
        assert!(n > 0, "daybook exited before showing the menu");
        seen.extend_from_slice(&buf[..n]);
    }

    let status = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(status.success());

    stdout.read_to_end(&mut seen).unwrap();
    let exit = child.wait().unwrap();
    drop(stdin);

    let output = String::from_utf8_lossy(&seen);
    assert_eq!(exit.code(), Some(0), "stdout:\n{}", output);
    assert!(output.contains("Goodbye!"), "stdout:\n{}", output);
    assert!(!temp.path().join("journal.json").exists());
}

#[test]
fn test_unreadable_journal_fails_startup() {
    let temp = TempDir::new().unwrap();
    // A directory where the journal file should be cannot be read as a file
    fs::create_dir(temp.path().join("journal.json")).unwrap();

    daybook_cmd()
        .current_dir(temp.path())
        .write_stdin("6\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn test_rejects_arguments() {
    daybook_cmd().arg("list").assert().failure();
}

#[test]
fn test_version_flag() {
    daybook_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("daybook"));
}
