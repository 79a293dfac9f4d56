//! Pure board storage.
//!
//! The board is an arena-style grid of `PieceId`s. It knows nothing about
//! movement or legality; pieces themselves live in the `PieceRegister`.

use crate::board_game::position::{Position, BOARD_SIZE};
use crate::chess::chess_piece::PieceId;

/// An 8x8 grid of optional piece identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pieces: [[Option<PieceId>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub const fn columns(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub fn piece(&self, position: Position) -> Option<PieceId> {
        self.pieces[position.row()][position.column()]
    }

    #[inline]
    pub fn there_is_a_piece(&self, position: Position) -> bool {
        self.piece(position).is_some()
    }

    /// Puts a piece on an empty square.
    ///
    /// Callers validate the square beforehand; placing onto an occupied square
    /// is a logic error.
    pub fn place_piece(&mut self, piece: PieceId, position: Position) {
        let cell = &mut self.pieces[position.row()][position.column()];
        debug_assert!(cell.is_none(), "square {position} is already occupied");
        *cell = Some(piece);
    }

    /// Removes and returns whatever occupies `position`.
    pub fn remove_piece(&mut self, position: Position) -> Option<PieceId> {
        self.pieces[position.row()][position.column()].take()
    }
}
