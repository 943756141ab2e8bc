//! Move selection for the computer player.
//!
//! Each [`Difficulty`] maps to one strategy:
//!
//! - **Easy** picks a random empty square.
//! - **Medium** flips a coin between Easy and Hard on every move.
//! - **Hard** applies [`HeuristicRule`]s in priority order and falls back
//!   to Easy when none of them matches.
//!
//! Hard is a greedy single-ply heuristic over the eight win paths. It never
//! looks further ahead than "two of mine and a gap" style patterns and can
//! be beaten by a careful opponent.

use super::difficulty::Difficulty;
use super::error::EngineError;
use super::session_rng::SessionRng;
use super::types::{Board, Cell};
use super::win_path::{PathCounts, WinPaths};
use tracing::{debug, instrument};

/// The rule that produced a Hard move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HeuristicRule {
    /// First move of the game: take the centre.
    #[display("opening")]
    Opening,
    /// Two noughts and a gap: complete the line.
    #[display("win")]
    Win,
    /// Two crosses and a gap: block the line.
    #[display("block")]
    Block,
    /// One nought and two gaps: extend the line.
    #[display("build")]
    Build,
    /// One cross and two gaps: take a square on the opponent's line.
    #[display("occupy")]
    Occupy,
}

impl HeuristicRule {
    /// Line rules in the order they are tried.
    pub const LINE_RULES: [HeuristicRule; 4] = [
        HeuristicRule::Win,
        HeuristicRule::Block,
        HeuristicRule::Build,
        HeuristicRule::Occupy,
    ];

    /// Does a path with these counts qualify for this rule?
    pub fn matches(self, counts: PathCounts) -> bool {
        match self {
            HeuristicRule::Opening => false,
            HeuristicRule::Win => counts.nought == 2 && counts.empty == 1,
            HeuristicRule::Block => counts.cross == 2 && counts.empty == 1,
            HeuristicRule::Build => counts.nought == 1 && counts.empty == 2,
            HeuristicRule::Occupy => counts.cross == 1 && counts.empty == 2,
        }
    }
}

/// Chooses the computer's next square for `difficulty`.
///
/// # Errors
///
/// Returns a precondition violation if the board has no empty square.
#[instrument(skip(board, paths, rng))]
pub fn choose_move(
    difficulty: Difficulty,
    board: &Board,
    move_count: u8,
    paths: &WinPaths,
    rng: &mut SessionRng,
) -> Result<Cell, EngineError> {
    if board.is_full() {
        return Err(EngineError::precondition(
            "no empty square left for the computer",
        ));
    }

    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => mixed_move(board, move_count, paths, rng),
        Difficulty::Hard => heuristic_move(board, move_count, paths, rng),
    }
}

/// Uniformly random empty square.
#[instrument(skip(board, rng))]
fn random_move(board: &Board, rng: &mut SessionRng) -> Result<Cell, EngineError> {
    let empty = board.empty_cells();
    let cell = rng
        .choose(&empty)
        .copied()
        .ok_or_else(|| EngineError::precondition("no empty square left for the computer"))?;
    debug!(%cell, "Random move");
    Ok(cell)
}

/// Easy or Hard with equal probability.
fn mixed_move(
    board: &Board,
    move_count: u8,
    paths: &WinPaths,
    rng: &mut SessionRng,
) -> Result<Cell, EngineError> {
    if rng.random_bool() {
        debug!("Medium chose Easy");
        random_move(board, rng)
    } else {
        debug!("Medium chose Hard");
        heuristic_move(board, move_count, paths, rng)
    }
}

fn heuristic_move(
    board: &Board,
    move_count: u8,
    paths: &WinPaths,
    rng: &mut SessionRng,
) -> Result<Cell, EngineError> {
    match heuristic_choice(board, move_count, paths) {
        Some((cell, rule)) => {
            debug!(%cell, %rule, "Heuristic move");
            Ok(cell)
        }
        None => {
            debug!("No heuristic rule matched, falling back to random");
            random_move(board, rng)
        }
    }
}

/// The deterministic part of Hard.
///
/// Returns the chosen cell with the rule that picked it, or `None` when no
/// rule applies and the caller should fall back to a random move. Paths are
/// scanned in [`WinPaths`] order for each rule; the first qualifying path
/// wins, and within it the first empty cell in enumeration order.
///
/// `move_count` counts moves by both players, so the opening rule only fires
/// when the computer makes the very first move of the game.
#[instrument(skip(board, paths))]
pub fn heuristic_choice(
    board: &Board,
    move_count: u8,
    paths: &WinPaths,
) -> Option<(Cell, HeuristicRule)> {
    if move_count == 0 {
        return Some((Cell::CENTER, HeuristicRule::Opening));
    }

    let evaluated: Vec<_> = paths.evaluate(board).collect();

    HeuristicRule::LINE_RULES.iter().find_map(|&rule| {
        evaluated
            .iter()
            .find(|(_, counts)| rule.matches(*counts))
            .and_then(|(path, _)| path.first_empty(board))
            .map(|cell| (cell, rule))
    })
}
