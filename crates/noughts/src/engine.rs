//! The game engine: board, session state and the computer opponent.

use super::difficulty::Difficulty;
use super::error::{EngineError, EngineErrorKind};
use super::observer::GameObserver;
use super::position::Position;
use super::rules;
use super::session_rng::SessionRng;
use super::strategy;
use super::types::{Board, Cell, GameStatus, Mark, Square};
use super::win_path::WinPaths;
use tracing::{debug, info, instrument};

/// A noughts and crosses session against the computer.
///
/// The human plays crosses and the computer plays noughts. Every accepted
/// move is reported to the observer through [`GameObserver::on_change`], and
/// the end of the session through [`GameObserver::on_game_over`].
///
/// All operations run to completion synchronously. In particular
/// [`Engine::human_move`] also plays the computer's reply before it returns
/// when the human's move did not end the game.
#[derive(Debug)]
pub struct Engine<O> {
    observer: O,
    board: Board,
    move_count: u8,
    status: GameStatus,
    win_paths: WinPaths,
    difficulty: Difficulty,
    rng: SessionRng,
}

impl<O: GameObserver> Engine<O> {
    /// Creates an engine with a randomly seeded generator.
    #[instrument(skip(observer))]
    pub fn new(observer: O) -> Self {
        Self::with_rng(observer, SessionRng::from_random())
    }

    /// Creates an engine drawing its random moves from `rng`.
    #[instrument(skip(observer))]
    pub fn with_rng(observer: O, rng: SessionRng) -> Self {
        info!(seed = rng.seed(), "Creating engine");
        Self {
            observer,
            board: Board::new(),
            move_count: 0,
            status: GameStatus::InProgress,
            win_paths: WinPaths::new(),
            difficulty: Difficulty::default(),
            rng,
        }
    }

    /// Sets the starting difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Plays a cross on `square` (1-9, reading order) and, if the game is
    /// still going, the computer's reply.
    ///
    /// Moves on an occupied square or after the game has ended are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::InvalidArgument`] if `square` is not 1-9.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn human_move(&mut self, square: u8) -> Result<(), EngineError> {
        let position = Position::from_square(square)
            .ok_or_else(|| EngineError::new(EngineErrorKind::InvalidArgument(square)))?;

        if self.status.is_over() {
            debug!("Game is over, ignoring move");
            return Ok(());
        }

        let cell = position.cell();
        if !self.board.is_empty(cell) {
            debug!(%position, "Square already occupied, ignoring move");
            return Ok(());
        }

        self.place(cell, Mark::Cross);

        if !self.check_for_winner() {
            self.computer_move()?;
        }

        Ok(())
    }

    /// Plays a nought chosen by the current difficulty's strategy.
    ///
    /// Called by [`Engine::human_move`], or directly by the host to let the
    /// computer open the game.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::PreconditionViolation`] if the game is over
    /// or the board is full.
    #[instrument(skip(self), fields(difficulty = %self.difficulty, move_count = self.move_count))]
    pub fn computer_move(&mut self) -> Result<(), EngineError> {
        if self.status.is_over() {
            return Err(EngineError::precondition(
                "computer cannot move after the game is over",
            ));
        }

        let cell = strategy::choose_move(
            self.difficulty,
            &self.board,
            self.move_count,
            &self.win_paths,
            &mut self.rng,
        )?;

        self.place(cell, Mark::Nought);
        self.check_for_winner();

        Ok(())
    }

    /// Clears the board and starts a new session.
    ///
    /// The difficulty is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.board = Board::new();
        self.move_count = 0;
        self.status = GameStatus::InProgress;
    }

    /// Display name of the current difficulty.
    pub fn level_string(&self) -> String {
        self.difficulty.to_string()
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty. Takes effect from the computer's next move,
    /// including mid-game.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(from = %self.difficulty, to = %difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played this session by both players.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the session is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Seed of the random generator, for reproducing a session.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer, for hosts that keep view state in it.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn place(&mut self, cell: Cell, mark: Mark) {
        self.board.set(cell, Square::Occupied(mark));
        self.move_count += 1;
        debug!(%cell, %mark, move_count = self.move_count, "Mark placed");
        self.observer.on_change(cell.column(), cell.row(), mark);
    }

    /// Runs win/draw detection; returns true if the game is over.
    fn check_for_winner(&mut self) -> bool {
        let status = rules::evaluate(&self.board, self.move_count);
        if let Some(outcome) = status.outcome() {
            info!(%outcome, move_count = self.move_count, "Game over");
            self.status = status;
            self.observer.on_game_over(outcome);
            return true;
        }
        false
    }
}
