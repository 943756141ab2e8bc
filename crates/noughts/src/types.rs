//! Core domain types for noughts and crosses.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed on the board.
///
/// The human always plays [`Mark::Cross`] and the computer always plays
/// [`Mark::Nought`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Cross, played by the human.
    #[display("X")]
    Cross,
    /// Nought, played by the computer.
    #[display("O")]
    Nought,
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Square holds a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// Row and column of a square on the 3x3 grid.
///
/// Both coordinates are always in `0..=2`, so a `Cell` can index a
/// [`Board`] without bounds checks at the call site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("(row {}, column {})", row, column)]
pub struct Cell {
    row: usize,
    column: usize,
}

impl Cell {
    /// The centre square, which lies on four of the eight win paths.
    pub const CENTER: Cell = Cell::at(1, 1);

    /// Creates a cell, or `None` if either coordinate is off the board.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        (row < 3 && column < 3).then_some(Self { row, column })
    }

    pub(crate) const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn column(self) -> usize {
        self.column
    }

    /// All nine cells in reading order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..3).flat_map(|row| (0..3).map(move |column| Cell::at(row, column)))
    }
}

/// 3x3 noughts and crosses board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed `[row][column]`.
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.row][cell.column]
    }

    /// Sets the square at the given cell.
    ///
    /// This is raw board access with no game rules applied; the engine is
    /// the only place that enforces turn order and occupancy.
    pub fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.row][cell.column] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// Returns the empty cells in reading order.
    #[instrument(skip(self))]
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|cell| self.is_empty(*cell)).collect()
    }

    /// Number of squares holding a mark.
    pub fn occupied_count(&self) -> usize {
        Cell::all().filter(|cell| !self.is_empty(*cell)).count()
    }

    /// Returns true when no empty square remains.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == 9
    }
}

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with three in a row.
    Won(Mark),
    /// Board filled with no winner.
    Drawn,
}

impl GameStatus {
    /// Returns true for the terminal states.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the outcome reported to observers, if the game has ended.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(Outcome::Winner(mark)),
            GameStatus::Drawn => Some(Outcome::Draw),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The given mark completed a line.
    Winner(Mark),
    /// All nine squares were used with no line completed.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_bounds() {
        assert!(Cell::new(2, 2).is_some());
        assert!(Cell::new(3, 0).is_none());
        assert!(Cell::new(0, 3).is_none());
    }

    #[test]
    fn test_cells_in_reading_order() {
        let cells: Vec<_> = Cell::all().map(|c| (c.row(), c.column())).collect();
        assert_eq!(cells[0], (0, 0));
        assert_eq!(cells[2], (0, 2));
        assert_eq!(cells[3], (1, 0));
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn test_board_occupancy() {
        let mut board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
        board.set(Cell::CENTER, Square::Occupied(Mark::Nought));
        assert_eq!(board.occupied_count(), 1);
        assert!(!board.is_empty(Cell::CENTER));
        assert!(!board.is_full());
    }
}
