//! Noughts and crosses engine with a pluggable computer opponent.
//!
//! The [`Engine`] owns the board and session state and plays noughts
//! against a human playing crosses. It performs no I/O: hosts drive it
//! through [`Engine::human_move`], [`Engine::computer_move`] and
//! [`Engine::new_game`], and learn about changes through a
//! [`GameObserver`].
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, Engine, GameEvent, Mark};
//!
//! let mut engine = Engine::new(Vec::<GameEvent>::new()).with_difficulty(Difficulty::Hard);
//! engine.human_move(5)?;
//!
//! // the human's cross, then the computer's reply
//! assert_eq!(engine.move_count(), 2);
//! assert!(matches!(
//!     engine.observer()[0],
//!     GameEvent::Changed { column: 1, row: 1, mark: Mark::Cross }
//! ));
//! # Ok::<(), noughts::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod engine;
mod error;
mod observer;
mod position;
mod session_rng;
mod strategy;
mod types;
mod win_path;

pub mod rules;

pub use difficulty::Difficulty;
pub use engine::Engine;
pub use error::{EngineError, EngineErrorKind};
pub use observer::{FnObserver, GameEvent, GameObserver};
pub use position::Position;
pub use session_rng::SessionRng;
pub use strategy::{HeuristicRule, choose_move, heuristic_choice};
pub use types::{Board, Cell, GameStatus, Mark, Outcome, Square};
pub use win_path::{PathCounts, WinPath, WinPaths};
