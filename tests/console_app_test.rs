//! Tests for console command handling.

use noughts::{Difficulty, Engine, GameStatus, Mark, Outcome, Position, SessionRng};
use noughts_console::{App, BoardView, ConsoleCommand};

fn app(difficulty: Difficulty, computer_starts: bool) -> App {
    let engine =
        Engine::with_rng(BoardView::new(), SessionRng::new(4)).with_difficulty(difficulty);
    App::new(engine, computer_starts).unwrap()
}

#[test]
fn test_view_mirrors_engine_board() {
    let mut app = app(Difficulty::Hard, false);
    app.handle(ConsoleCommand::Play(Position::Center)).unwrap();

    assert_eq!(app.view().mark_at(1, 1), Some(Mark::Cross));
    for position in Position::ALL {
        let cell = position.cell();
        assert_eq!(
            app.view().mark_at(cell.column(), cell.row()),
            app.engine().board().get(cell).mark()
        );
    }
}

#[test]
fn test_computer_starts_only_on_empty_board() {
    let mut app = app(Difficulty::Hard, false);
    app.handle(ConsoleCommand::ComputerStarts).unwrap();
    assert_eq!(app.engine().move_count(), 1);
    assert_eq!(app.view().mark_at(1, 1), Some(Mark::Nought));

    app.handle(ConsoleCommand::ComputerStarts).unwrap();
    assert_eq!(app.engine().move_count(), 1);
}

#[test]
fn test_configured_computer_start_on_every_game() {
    let mut app = app(Difficulty::Hard, true);
    assert_eq!(app.engine().move_count(), 1);
    app.handle(ConsoleCommand::Play(Position::TopLeft)).unwrap();
    app.handle(ConsoleCommand::NewGame).unwrap();
    assert_eq!(app.engine().move_count(), 1);
    assert_eq!(app.view().mark_at(1, 1), Some(Mark::Nought));
    assert_eq!(app.view().mark_at(0, 0), None);
}

#[test]
fn test_play_until_game_over_shows_result() {
    let mut app = app(Difficulty::Hard, true);
    while !app.engine().is_game_over() {
        let position = Position::valid_moves(app.engine().board())[0];
        app.handle(ConsoleCommand::Play(position)).unwrap();
    }
    let outcome = app.view().outcome().unwrap();
    assert_eq!(Some(outcome), app.engine().status().outcome());
    assert_ne!(outcome, Outcome::Winner(Mark::Cross));
    let status = app.view().status_line(&app.engine().level_string());
    assert!(status.contains("new game"));
}

#[test]
fn test_difficulty_and_quit() {
    let mut app = app(Difficulty::Medium, false);
    app.handle(ConsoleCommand::SetDifficulty(Difficulty::Easy)).unwrap();
    assert_eq!(app.engine().difficulty(), Difficulty::Easy);
    assert_eq!(app.view().status_line(&app.engine().level_string()), "Level: Easy");

    assert!(app.is_running());
    app.handle(ConsoleCommand::Quit).unwrap();
    assert!(!app.is_running());
    assert_eq!(app.engine().status(), GameStatus::InProgress);
}
