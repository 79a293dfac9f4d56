//! Read-only view of the board handed to piece capabilities.
//!
//! Pieces never keep a board reference; instead every mask computation gets a
//! `BoardView` joining the grid of ids with the register that owns the pieces.

use crate::board_game::board::Board;
use crate::board_game::position::Position;
use crate::chess::chess_piece::ChessPiece;
use crate::chess::chess_types::Color;
use crate::chess::piece_register::PieceRegister;
use crate::moves::move_mask::MoveMask;

#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    register: &'a PieceRegister,
    vacated: Option<Position>,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, register: &'a PieceRegister) -> Self {
        Self {
            board,
            register,
            vacated: None,
        }
    }

    /// Same view with `position` treated as empty.
    ///
    /// Used when probing squares a king could step to: the king must not
    /// shield the squares behind it from sliding attackers.
    pub fn without(self, position: Position) -> Self {
        Self {
            vacated: Some(position),
            ..self
        }
    }

    #[inline]
    pub fn register(&self) -> &'a PieceRegister {
        self.register
    }

    pub fn piece_at(&self, position: Position) -> Option<&'a ChessPiece> {
        if self.vacated == Some(position) {
            return None;
        }
        self.board
            .piece(position)
            .and_then(|id| self.register.get(id))
    }

    #[inline]
    pub fn color_at(&self, position: Position) -> Option<Color> {
        self.piece_at(position).map(|piece| piece.color)
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    #[inline]
    pub fn is_opponent_piece(&self, position: Position, color: Color) -> bool {
        self.color_at(position) == Some(color.opposite())
    }

    /// Squares occupied by `color`.
    pub fn occupied_by(&self, color: Color) -> MoveMask {
        self.register
            .on_board(color)
            .map(|(_, position)| position)
            .filter(|position| self.vacated != Some(*position))
            .collect()
    }

    /// Walks from `from` in one direction, marking every square up to and
    /// including the first occupied one.
    pub fn trace_ray(&self, from: Position, d_row: i8, d_column: i8) -> MoveMask {
        let mut mask = MoveMask::EMPTY;
        let mut current = from.offset(d_row, d_column);
        while let Some(square) = current {
            mask.set(square);
            if !self.is_empty(square) {
                break;
            }
            current = square.offset(d_row, d_column);
        }
        mask
    }
}
