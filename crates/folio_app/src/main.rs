//! Folio preview harness
//!
//! Runs one page session headlessly against the preference file, applies
//! the requested interaction and prints the resulting page state. Running it
//! again picks up the persisted preferences.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use folio_app::{logging, open_session, FolioConfig, UiEvent};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Preview the Folio portfolio theme state", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Mark a card's preview image as failed to load (repeatable)
    #[arg(long = "fail-image", value_name = "INDEX")]
    failed_images: Vec<usize>,

    /// Print the page state as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current page state
    Show,

    /// Select a palette (unknown names are ignored)
    Theme {
        /// Palette id: indigo, green or purple
        name: String,
    },

    /// Flip between dark and light mode
    ToggleMode,

    /// Replay a JSON array of UI events
    Replay {
        /// Event file, e.g. [{"type": "toggle_color_mode"}]
        file: PathBuf,
    },
}

/// Events for the requested command, followed by the image failures
fn requested_events(command: Option<Commands>, failed_images: Vec<usize>) -> Result<Vec<UiEvent>> {
    let mut events = match command.unwrap_or(Commands::Show) {
        Commands::Show => Vec::new(),
        Commands::Theme { name } => vec![UiEvent::SelectTheme { theme: name }],
        Commands::ToggleMode => vec![UiEvent::ToggleColorMode],
        Commands::Replay { file } => UiEvent::list_from_path(&file)
            .with_context(|| format!("Failed to read events from {}", file.display()))?,
    };
    events.extend(
        failed_images
            .into_iter()
            .map(|card| UiEvent::ImageFailed { card }),
    );
    Ok(events)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = FolioConfig::load(&cli.config)?;
    let mut session = open_session(&config)?;

    for event in requested_events(cli.command, cli.failed_images)? {
        session.dispatch(event);
    }

    let snapshot = session.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", snapshot.to_text());
    }

    tracing::info!(
        "preferences saved to {}",
        session.controller().store().path().display()
    );
    Ok(())
}
