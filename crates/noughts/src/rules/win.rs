//! Win detection logic.

use super::super::types::{Board, Mark};
use super::super::win_path::WinPaths;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are checked columns first, then rows, then the top-left to
/// bottom-right diagonal, then the top-right to bottom-left diagonal; the
/// first complete line decides.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let paths = WinPaths::new();
    let winner = paths
        .in_detection_order()
        .find_map(|path| path.completed_by(board));
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Square};

    fn fill(board: &mut Board, cells: &[(usize, usize)], mark: Mark) {
        for &(row, column) in cells {
            board.set(Cell::at(row, column), Square::Occupied(mark));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_left_column() {
        let mut board = Board::new();
        fill(&mut board, &[(0, 0), (1, 0), (2, 0)], Mark::Nought);
        assert_eq!(check_winner(&board), Some(Mark::Nought));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        fill(&mut board, &[(0, 2), (1, 1), (2, 0)], Mark::Cross);
        assert_eq!(check_winner(&board), Some(Mark::Cross));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        fill(&mut board, &[(0, 0), (0, 1)], Mark::Cross);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_complete_line_decides() {
        // two complete columns can only come from raw board edits; the
        // leftmost one is found first
        let mut board = Board::new();
        fill(&mut board, &[(0, 2), (1, 2), (2, 2)], Mark::Cross);
        fill(&mut board, &[(0, 1), (1, 1), (2, 1)], Mark::Nought);
        assert_eq!(check_winner(&board), Some(Mark::Nought));
    }
}
