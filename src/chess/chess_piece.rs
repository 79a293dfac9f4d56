//! Piece identity, ownership colour and move counter.
//!
//! A `ChessPiece` carries no board reference. Movement is computed by the
//! capability functions in `moves`, which receive the board explicitly.

use std::fmt;

use crate::board_game::position::Position;
use crate::chess::chess_types::{Color, PieceKind};

/// Stable index of a piece inside the `PieceRegister`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessPiece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub move_count: u32,
}

impl ChessPiece {
    pub fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            move_count: 0,
        }
    }

    #[inline]
    pub fn increase_move_count(&mut self) {
        self.move_count += 1;
    }

    #[inline]
    pub fn decrease_move_count(&mut self) {
        self.move_count = self.move_count.saturating_sub(1);
    }

    #[inline]
    pub fn glyph(&self) -> char {
        self.kind.glyph()
    }
}

impl fmt::Display for ChessPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Where a registered piece currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceStatus {
    OnBoard(Position),
    Captured,
}
