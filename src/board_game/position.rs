//! Zero-based board coordinates.
//!
//! `Position` is the engine-side coordinate: row 0 is the topmost rank (rank 8)
//! and column 0 is file `a`. User-facing coordinates live in
//! `chess::chess_position`.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A (row, column) pair inside the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Returns `None` when the coordinates fall outside the board.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Option<Self> {
        if row < BOARD_SIZE && column < BOARD_SIZE {
            Some(Self { row, column })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Square index used by move masks (`row * 8 + column`).
    #[inline]
    pub const fn index(self) -> usize {
        self.row * BOARD_SIZE + self.column
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Moves the position by a row and column delta.
    ///
    /// Returns `None` if the result would leave the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        let row = self.row as i32 + d_row as i32;
        let column = self.column as i32 + d_column as i32;
        if row < 0 || column < 0 {
            return None;
        }
        Self::new(row as usize, column as usize)
    }

    /// Iterates all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.row, self.column)
    }
}
