//! Named squares and the 1-9 square numbering used by hosts.

use super::types::{Board, Cell};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A named square on the board.
///
/// Hosts address squares by number, arranged as a phone keypad
/// read top to bottom:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (square 1)
    TopLeft,
    /// Top-center (square 2)
    TopCenter,
    /// Top-right (square 3)
    TopRight,
    /// Middle-left (square 4)
    MiddleLeft,
    /// Center (square 5)
    Center,
    /// Middle-right (square 6)
    MiddleRight,
    /// Bottom-left (square 7)
    BottomLeft,
    /// Bottom-center (square 8)
    BottomCenter,
    /// Bottom-right (square 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in square-number order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Creates a position from its square number (1-9).
    #[instrument]
    pub fn from_square(square: u8) -> Option<Self> {
        match square {
            1..=9 => Some(Self::ALL[usize::from(square - 1)]),
            _ => None,
        }
    }

    /// Square number (1-9).
    pub fn square(self) -> u8 {
        // variants are declared in square order
        self as u8 + 1
    }

    /// Grid coordinates: row is `(square - 1) / 3`, column is `(square - 1) % 3`.
    pub fn cell(self) -> Cell {
        let index = usize::from(self.square() - 1);
        Cell::at(index / 3, index % 3)
    }

    /// Inverse of [`Position::cell`].
    pub fn from_cell(cell: Cell) -> Self {
        Self::ALL[cell.row() * 3 + cell.column()]
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(pos.cell()))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_mapping_matches_keypad() {
        let cell = Position::from_square(6).unwrap().cell();
        assert_eq!((cell.row(), cell.column()), (1, 2));
        let cell = Position::from_square(7).unwrap().cell();
        assert_eq!((cell.row(), cell.column()), (2, 0));
    }

    #[test]
    fn test_square_out_of_range() {
        assert_eq!(Position::from_square(0), None);
        assert_eq!(Position::from_square(10), None);
    }

    #[test]
    fn test_cell_round_trip_for_every_square() {
        for pos in <Position as strum::IntoEnumIterator>::iter() {
            assert_eq!(Position::from_cell(pos.cell()), pos);
            assert_eq!(Position::from_square(pos.square()), Some(pos));
        }
    }
}
