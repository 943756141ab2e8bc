//! Board view maintained from engine notifications.
//!
//! The console never reads the engine's board directly; everything it draws
//! comes from the `on_change` and `on_game_over` callbacks.

use noughts::{GameObserver, Mark, Outcome};
use tracing::{debug, instrument};

/// What the console shows: the marks seen so far and the result, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    /// Marks indexed `[row][column]`.
    marks: [[Option<Mark>; 3]; 3],
    outcome: Option<Outcome>,
}

impl BoardView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the view for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Mark shown at the given square.
    pub fn mark_at(&self, column: usize, row: usize) -> Option<Mark> {
        self.marks.get(row)?.get(column).copied().flatten()
    }

    /// Result of the finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Status line for the current difficulty `level`.
    pub fn status_line(&self, level: &str) -> String {
        match self.outcome {
            Some(Outcome::Winner(Mark::Cross)) => "You win! Press n for a new game.".to_string(),
            Some(Outcome::Winner(Mark::Nought)) => {
                "The computer wins. Press n for a new game.".to_string()
            }
            Some(Outcome::Draw) => "Draw. Press n for a new game.".to_string(),
            None => format!("Level: {}", level),
        }
    }
}

impl GameObserver for BoardView {
    fn on_change(&mut self, column: usize, row: usize, mark: Mark) {
        debug!(column, row, %mark, "View updated");
        if let Some(slot) = self.marks.get_mut(row).and_then(|r| r.get_mut(column)) {
            *slot = Some(mark);
        }
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        debug!(%outcome, "View game over");
        self.outcome = Some(outcome);
    }
}
