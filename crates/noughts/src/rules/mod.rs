//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](super::Board) that decide whether a
//! session is still in progress, won or drawn.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::check_winner;

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Status of the session after a move.
///
/// A completed line takes precedence over the draw check, so a ninth move
/// that completes a line is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, move_count: u8) -> GameStatus {
    if let Some(mark) = check_winner(board) {
        GameStatus::Won(mark)
    } else if is_draw(move_count) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}
