//! Tests for console key bindings.

use crossterm::event::KeyCode;
use noughts::{Difficulty, Position};
use noughts_console::{ConsoleCommand, command_for_key};

#[test]
fn test_digits_map_to_squares() {
    assert_eq!(
        command_for_key(KeyCode::Char('1')),
        Some(ConsoleCommand::Play(Position::TopLeft))
    );
    assert_eq!(
        command_for_key(KeyCode::Char('5')),
        Some(ConsoleCommand::Play(Position::Center))
    );
    assert_eq!(
        command_for_key(KeyCode::Char('9')),
        Some(ConsoleCommand::Play(Position::BottomRight))
    );
    assert_eq!(command_for_key(KeyCode::Char('0')), None);
}

#[test]
fn test_classic_level_keys() {
    assert_eq!(
        command_for_key(KeyCode::Char('i')),
        Some(ConsoleCommand::SetDifficulty(Difficulty::Easy))
    );
    assert_eq!(
        command_for_key(KeyCode::Char('a')),
        Some(ConsoleCommand::SetDifficulty(Difficulty::Medium))
    );
    assert_eq!(
        command_for_key(KeyCode::Char('g')),
        Some(ConsoleCommand::SetDifficulty(Difficulty::Hard))
    );
}

#[test]
fn test_game_control_keys() {
    assert_eq!(
        command_for_key(KeyCode::Char('s')),
        Some(ConsoleCommand::ComputerStarts)
    );
    assert_eq!(command_for_key(KeyCode::Char('n')), Some(ConsoleCommand::NewGame));
    assert_eq!(command_for_key(KeyCode::Char('x')), Some(ConsoleCommand::Quit));
    assert_eq!(command_for_key(KeyCode::Esc), Some(ConsoleCommand::Quit));
    assert_eq!(command_for_key(KeyCode::Char('z')), None);
    assert_eq!(command_for_key(KeyCode::Enter), None);
}
