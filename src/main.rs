//! Noughts and crosses in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Engine, SessionRng};
use noughts_console::{App, BoardView, Cli, ConsoleConfig};
use std::fs::File;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ConsoleConfig::resolve(&cli)?;

    init_tracing(&config)?;
    info!(?config, "Starting noughts console");

    let rng = match config.seed() {
        Some(seed) => SessionRng::new(*seed),
        None => SessionRng::from_random(),
    };
    let engine = Engine::with_rng(BoardView::new(), rng).with_difficulty(*config.difficulty());
    info!(seed = engine.seed(), "Engine ready");

    let mut app = App::new(engine, *config.computer_starts())?;
    noughts_console::run(&mut app)
}

/// Installs the global subscriber. Logs go to the configured file, or to
/// stderr, never to stdout where the board is drawn.
fn init_tracing(config: &ConsoleConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    match config.log_file() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
