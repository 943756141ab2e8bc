//! Terminal front-end for the noughts engine.
//!
//! This crate is a thin host around [`noughts::Engine`]: it maps key presses
//! to engine calls and draws a [`BoardView`] that is updated only through
//! the engine's observer callbacks.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;
mod view;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, ConsoleConfig};
pub use input::{ConsoleCommand, KEY_HELP, command_for_key};
pub use terminal::run;
pub use view::BoardView;
