//! Rectangular board geometry and cell storage

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest supported side length
pub const MIN_SIDE: usize = 4;

/// Direction vectors (dr, dc), clockwise from north
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // S
    (1, -1),  // SW
    (0, -1),  // W
    (-1, -1), // NW
];

/// Contents of a single square
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'B' | 'b' => Some(Cell::Black),
            'W' | 'w' => Some(Cell::White),
            _ => None,
        }
    }
}

/// Errors from parsing a text layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown cell symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

/// Row-major grid of cells (clone to explore hypothetical positions)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with the four centre cells seeded
    ///
    /// ```text
    /// W B
    /// B W
    /// ```
    ///
    /// # Panics
    /// Panics if either dimension is odd or smaller than [`MIN_SIDE`].
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= MIN_SIDE && cols >= MIN_SIDE,
            "board must be at least {MIN_SIDE}x{MIN_SIDE}, got {rows}x{cols}"
        );
        assert!(
            rows % 2 == 0 && cols % 2 == 0,
            "board dimensions must be even, got {rows}x{cols}"
        );

        let mut board = Self::empty(rows, cols);
        let (r, c) = (rows / 2, cols / 2);
        board.set(r - 1, c - 1, Cell::White);
        board.set(r - 1, c, Cell::Black);
        board.set(r, c - 1, Cell::Black);
        board.set(r, c, Cell::White);
        board
    }

    fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Parse a layout of `B`, `W` and `.` (or `-`), one string per row
    pub fn from_rows(rows: &[&str]) -> Result<Self, LayoutError> {
        let first = rows.first().ok_or(LayoutError::Empty)?;
        let cols = first.chars().count();
        if cols == 0 {
            return Err(LayoutError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(LayoutError::RaggedRow {
                    row,
                    found,
                    expected: cols,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(LayoutError::UnknownSymbol { row, col, symbol })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if (row, col) is on the board
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell at (row, col); `None` when off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.contains(row, col) {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = row * self.cols + col;
        self.cells[idx] = cell;
    }

    /// Step one square from (row, col) in direction (dr, dc)
    pub fn step(&self, row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.contains(r, c).then_some((r, c))
    }

    /// Number of squares holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate `(row, col, cell)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / cols, i % cols, cell))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols)
                .map(|col| self.cells[row * self.cols + col].symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new(8, 8);
        assert_eq!(board.get(3, 3), Some(Cell::White));
        assert_eq!(board.get(3, 4), Some(Cell::Black));
        assert_eq!(board.get(4, 3), Some(Cell::Black));
        assert_eq!(board.get(4, 4), Some(Cell::White));
        assert_eq!(board.count(Cell::Empty), 60);
    }

    #[test]
    fn test_rectangular_layout() {
        let board = Board::new(4, 6);
        assert_eq!(board.get(1, 2), Some(Cell::White));
        assert_eq!(board.get(1, 3), Some(Cell::Black));
        assert_eq!(board.get(2, 2), Some(Cell::Black));
        assert_eq!(board.get(2, 3), Some(Cell::White));
        assert_eq!(board.get(4, 0), None);
        assert_eq!(board.get(0, 6), None);
    }

    #[test]
    #[should_panic(expected = "even")]
    fn test_odd_dimensions_rejected() {
        Board::new(5, 8);
    }

    #[test]
    #[should_panic(expected = "at least")]
    fn test_tiny_board_rejected() {
        Board::new(2, 2);
    }

    #[test]
    fn test_step_stays_on_board() {
        let board = Board::new(4, 4);
        assert_eq!(board.step(0, 0, (-1, 0)), None);
        assert_eq!(board.step(0, 0, (1, 1)), Some((1, 1)));
        assert_eq!(board.step(3, 3, (0, 1)), None);
    }

    #[test]
    fn test_from_rows_round_trips_display() {
        let board = Board::from_rows(&["B..W", "....", "-W..", "...b"]).unwrap();
        assert_eq!(board.to_string(), "B..W\n....\n.W..\n...B\n");
        assert_eq!(board.count(Cell::Black), 2);
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(Board::from_rows(&[]), Err(LayoutError::Empty));
        assert_eq!(
            Board::from_rows(&["....", "..."]),
            Err(LayoutError::RaggedRow { row: 1, found: 3, expected: 4 })
        );
        assert_eq!(
            Board::from_rows(&["..x."]),
            Err(LayoutError::UnknownSymbol { row: 0, col: 2, symbol: 'x' })
        );
    }
}
