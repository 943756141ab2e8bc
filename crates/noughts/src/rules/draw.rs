//! Draw detection logic.

/// Moves in a game that fills the board.
pub const MAX_MOVES: u8 = 9;

/// A game is drawn once all nine moves have been played without a winner.
///
/// Only meaningful after [`check_winner`](super::check_winner) found no
/// complete line.
pub fn is_draw(move_count: u8) -> bool {
    move_count >= MAX_MOVES
}

#[cfg(test)]
mod tests {
    use super::super::evaluate;
    use super::*;
    use crate::types::{Board, Cell, GameStatus, Mark, Square};

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (column, ch) in line.chars().enumerate() {
                let square = match ch {
                    'X' => Square::Occupied(Mark::Cross),
                    'O' => Square::Occupied(Mark::Nought),
                    _ => Square::Empty,
                };
                board.set(Cell::at(row, column), square);
            }
        }
        board
    }

    #[test]
    fn test_not_draw_before_ninth_move() {
        assert!(!is_draw(8));
        assert!(is_draw(9));
    }

    #[test]
    fn test_draw_detection() {
        let board = board_from(["XOX", "OXX", "OXO"]);
        assert_eq!(evaluate(&board, 9), GameStatus::Drawn);
    }

    #[test]
    fn test_ninth_move_win_is_not_draw() {
        let board = board_from(["XXX", "OOX", "XOO"]);
        assert_eq!(evaluate(&board, 9), GameStatus::Won(Mark::Cross));
    }

    #[test]
    fn test_in_progress() {
        let board = board_from(["X..", ".O.", "..."]);
        assert_eq!(evaluate(&board, 2), GameStatus::InProgress);
    }
}
