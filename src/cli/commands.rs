//! CLI command definitions

use clap::Parser;

/// daybook takes no arguments; everything happens in the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(
    about = "Interactive mood journal",
    long_about = "Interactive mood journal.\n\n\
    Entries are stored in journal.json in the directory daybook is started from."
)]
#[command(version)]
pub struct Cli {}
