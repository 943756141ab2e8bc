//! Key bindings for the console.

use crossterm::event::KeyCode;
use noughts::{Difficulty, Position};
use tracing::instrument;

/// An action requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play a cross on the square.
    Play(Position),
    /// Let the computer make the opening move.
    ComputerStarts,
    /// Change the computer's difficulty.
    SetDifficulty(Difficulty),
    /// Clear the board.
    NewGame,
    /// Leave the program.
    Quit,
}

/// Help text listing the bindings of [`command_for_key`].
pub const KEY_HELP: &str =
    "1-9 play | s computer starts | i/a/g easy/medium/hard | n new game | x quit";

/// Maps a key to a command; unbound keys return `None`.
///
/// Digits address squares laid out like a phone keypad. The classic level
/// keys `i`, `a` and `g` (idiot, average, genius) are bound alongside
/// `e`, `m` and `h`.
#[instrument]
pub fn command_for_key(key: KeyCode) -> Option<ConsoleCommand> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_square(digit as u8))
            .map(ConsoleCommand::Play),
        KeyCode::Char('s') => Some(ConsoleCommand::ComputerStarts),
        KeyCode::Char('i' | 'e') => Some(ConsoleCommand::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('a' | 'm') => Some(ConsoleCommand::SetDifficulty(Difficulty::Medium)),
        KeyCode::Char('g' | 'h') => Some(ConsoleCommand::SetDifficulty(Difficulty::Hard)),
        KeyCode::Char('n') => Some(ConsoleCommand::NewGame),
        KeyCode::Char('x' | 'q') | KeyCode::Esc => Some(ConsoleCommand::Quit),
        _ => None,
    }
}
