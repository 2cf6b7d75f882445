use clap::Parser;
use daybook::application::{self, Exit};
use daybook::cli::Cli;
use daybook::error::JournalError;
use daybook::infrastructure::{Config, FileSystemRepository, StdinInput};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    match run() {
        Ok(exit) => {
            debug!(?exit, "session ended");
            std::process::exit(0)
        }
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Diagnostics go to stderr so they never mix into the menu on stdout
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "daybook=error".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<Exit, JournalError> {
    let config = Config::from_current_dir()?;
    info!(path = %config.journal_path.display(), "opening journal");

    let repository = FileSystemRepository::new(config.journal_path);
    let input = StdinInput::spawn();
    let stdout = std::io::stdout();

    application::start(repository, input, stdout.lock(), config.bar_width)
}
