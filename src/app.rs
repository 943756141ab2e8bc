//! Application state and command handling.

use crate::input::ConsoleCommand;
use crate::view::BoardView;
use noughts::{Engine, EngineError};
use tracing::{debug, info, instrument};

/// The console application: one engine whose observer is the board view.
#[derive(Debug)]
pub struct App {
    engine: Engine<BoardView>,
    computer_starts: bool,
    running: bool,
}

impl App {
    /// Creates the application and, if configured, plays the computer's
    /// opening move.
    #[instrument(skip(engine))]
    pub fn new(engine: Engine<BoardView>, computer_starts: bool) -> Result<Self, EngineError> {
        let mut app = Self {
            engine,
            computer_starts,
            running: true,
        };
        app.open_game()?;
        Ok(app)
    }

    /// The engine.
    pub fn engine(&self) -> &Engine<BoardView> {
        &self.engine
    }

    /// The board view fed by the engine.
    pub fn view(&self) -> &BoardView {
        self.engine.observer()
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: ConsoleCommand) -> Result<(), EngineError> {
        debug!(?command, "Handling command");
        match command {
            ConsoleCommand::Play(position) => self.engine.human_move(position.square())?,
            ConsoleCommand::ComputerStarts => {
                // only meaningful before anyone has moved
                if self.engine.move_count() == 0 && !self.engine.is_game_over() {
                    self.engine.computer_move()?;
                }
            }
            ConsoleCommand::SetDifficulty(difficulty) => self.engine.set_difficulty(difficulty),
            ConsoleCommand::NewGame => {
                self.engine.new_game();
                self.engine.observer_mut().reset();
                self.open_game()?;
            }
            ConsoleCommand::Quit => {
                info!("Quit requested");
                self.running = false;
            }
        }
        Ok(())
    }

    fn open_game(&mut self) -> Result<(), EngineError> {
        if self.computer_starts {
            self.engine.computer_move()?;
        }
        Ok(())
    }
}
