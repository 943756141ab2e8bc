//! The eight lines that win the game, and per-line mark counts.

use super::types::{Board, Cell, Mark, Square};

/// Number of crosses, noughts and empty squares on one line.
///
/// Always sums to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathCounts {
    /// Squares holding a cross.
    pub cross: u8,
    /// Squares holding a nought.
    pub nought: u8,
    /// Empty squares.
    pub empty: u8,
}

/// One row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinPath {
    cells: [Cell; 3],
}

impl WinPath {
    /// The three cells, in the order the path enumerates them.
    pub fn cells(&self) -> &[Cell; 3] {
        &self.cells
    }

    /// Counts the marks on this path against `board`.
    pub fn counts(&self, board: &Board) -> PathCounts {
        self.cells
            .iter()
            .fold(PathCounts::default(), |mut counts, cell| {
                match board.get(*cell) {
                    Square::Empty => counts.empty += 1,
                    Square::Occupied(Mark::Cross) => counts.cross += 1,
                    Square::Occupied(Mark::Nought) => counts.nought += 1,
                }
                counts
            })
    }

    /// First empty cell in enumeration order.
    pub fn first_empty(&self, board: &Board) -> Option<Cell> {
        self.cells.iter().copied().find(|cell| board.is_empty(*cell))
    }

    /// Returns the mark filling all three cells, if any.
    pub fn completed_by(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.cells.map(|cell| board.get(cell));
        match a {
            Square::Occupied(mark) if a == b && a == c => Some(mark),
            _ => None,
        }
    }
}

const fn line(cells: [(usize, usize); 3]) -> WinPath {
    WinPath {
        cells: [
            Cell::at(cells[0].0, cells[0].1),
            Cell::at(cells[1].0, cells[1].1),
            Cell::at(cells[2].0, cells[2].1),
        ],
    }
}

const PATHS: [WinPath; 8] = [
    line([(0, 0), (0, 1), (0, 2)]),
    line([(1, 0), (1, 1), (1, 2)]),
    line([(2, 0), (2, 1), (2, 2)]),
    line([(0, 0), (1, 0), (2, 0)]),
    line([(0, 1), (1, 1), (2, 1)]),
    line([(0, 2), (1, 2), (2, 2)]),
    line([(0, 0), (1, 1), (2, 2)]),
    line([(0, 2), (1, 1), (2, 0)]),
];

/// Indices into [`PATHS`] for win detection: columns, rows, then diagonals.
const DETECTION_ORDER: [usize; 8] = [3, 4, 5, 0, 1, 2, 6, 7];

/// The fixed set of eight win paths.
///
/// Ordered rows (top to bottom), columns (left to right), the top-left to
/// bottom-right diagonal, then the top-right to bottom-left diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinPaths {
    paths: [WinPath; 8],
}

impl WinPaths {
    /// Builds the eight paths.
    pub const fn new() -> Self {
        Self { paths: PATHS }
    }

    /// Iterates the paths in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &WinPath> {
        self.paths.iter()
    }

    /// Iterates the paths in win detection order: columns, rows, then the
    /// two diagonals.
    pub fn in_detection_order(&self) -> impl Iterator<Item = &WinPath> {
        DETECTION_ORDER.iter().map(move |&index| &self.paths[index])
    }

    /// Pairs every path with its current counts.
    pub fn evaluate<'a>(
        &'a self,
        board: &'a Board,
    ) -> impl Iterator<Item = (&'a WinPath, PathCounts)> + 'a {
        self.paths.iter().map(move |path| (path, path.counts(board)))
    }
}

impl Default for WinPaths {
    fn default() -> Self {
        Self::new()
    }
}
