//! Notifications from the engine to its host.
//!
//! The engine performs no I/O. A host learns about the game through the two
//! callbacks of [`GameObserver`], which are invoked synchronously from inside
//! `human_move` and `computer_move`.

use super::types::{Mark, Outcome};

/// Receives engine notifications.
pub trait GameObserver {
    /// A square received a mark. Fired once per accepted move, after the
    /// board changes and before the win/draw check for that move.
    fn on_change(&mut self, column: usize, row: usize, mark: Mark);

    /// The session reached a terminal state. Fired exactly once per session.
    fn on_game_over(&mut self, outcome: Outcome);
}

/// Ignores every notification.
impl GameObserver for () {
    fn on_change(&mut self, _column: usize, _row: usize, _mark: Mark) {}

    fn on_game_over(&mut self, _outcome: Outcome) {}
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_change(&mut self, column: usize, row: usize, mark: Mark) {
        (**self).on_change(column, row, mark);
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        (**self).on_game_over(outcome);
    }
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn on_change(&mut self, column: usize, row: usize, mark: Mark) {
        (**self).on_change(column, row, mark);
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        (**self).on_game_over(outcome);
    }
}

/// Adapts a pair of closures into a [`GameObserver`].
pub struct FnObserver<C, G> {
    on_change: C,
    on_game_over: G,
}

impl<C, G> FnObserver<C, G>
where
    C: FnMut(usize, usize, Mark),
    G: FnMut(Outcome),
{
    /// Wraps the two callbacks.
    pub fn new(on_change: C, on_game_over: G) -> Self {
        Self {
            on_change,
            on_game_over,
        }
    }
}

impl<C, G> GameObserver for FnObserver<C, G>
where
    C: FnMut(usize, usize, Mark),
    G: FnMut(Outcome),
{
    fn on_change(&mut self, column: usize, row: usize, mark: Mark) {
        (self.on_change)(column, row, mark);
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        (self.on_game_over)(outcome);
    }
}

/// A notification captured as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// See [`GameObserver::on_change`].
    Changed {
        /// Column of the changed square.
        column: usize,
        /// Row of the changed square.
        row: usize,
        /// Mark now in the square.
        mark: Mark,
    },
    /// See [`GameObserver::on_game_over`].
    GameOver(Outcome),
}

/// Queues every notification, for hosts that drain events after each call.
impl GameObserver for Vec<GameEvent> {
    fn on_change(&mut self, column: usize, row: usize, mark: Mark) {
        self.push(GameEvent::Changed { column, row, mark });
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        self.push(GameEvent::GameOver(outcome));
    }
}
