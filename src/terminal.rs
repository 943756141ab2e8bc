//! Raw-mode terminal loop.

use crate::app::App;
use crate::input::command_for_key;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info, instrument, warn};

/// Restores the terminal on drop, including when the loop bails out early.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the console until the user quits.
#[instrument(skip(app))]
pub fn run(app: &mut App) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    while app.is_running() {
        terminal
            .draw(|frame| ui::draw(frame, app))
            .context("Failed to draw screen")?;

        let Event::Key(key) = event::read().context("Failed to read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match command_for_key(key.code) {
            Some(command) => {
                if let Err(e) = app.handle(command) {
                    warn!(error = %e, "Command failed");
                }
            }
            None => debug!(code = ?key.code, "Unbound key"),
        }
    }

    info!("Console closed");
    Ok(())
}
