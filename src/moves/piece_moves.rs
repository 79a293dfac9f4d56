//! The capability every piece variant supplies to the match engine.

use crate::board_game::position::Position;
use crate::chess::chess_piece::ChessPiece;
use crate::chess::chess_types::PieceKind;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::board_view::BoardView;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_mask::MoveMask;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

pub trait MovementCapability {
    /// Legality mask for the piece standing on `position`.
    fn possible_moves(&self, view: &BoardView, position: Position) -> MoveMask;

    fn is_there_any_possible_move(&self, view: &BoardView, position: Position) -> bool {
        !self.possible_moves(view, position).is_empty()
    }

    fn can_move_to(&self, view: &BoardView, position: Position, target: Position) -> bool {
        self.possible_moves(view, position).contains(target)
    }
}

impl MovementCapability for ChessPiece {
    fn possible_moves(&self, view: &BoardView, position: Position) -> MoveMask {
        let friendly = view.occupied_by(self.color);
        match self.kind {
            PieceKind::Pawn => pawn_moves(view, position, self.color, self.move_count),
            PieceKind::Knight => knight_attacks(position) & !friendly,
            PieceKind::Bishop => bishop_attacks(view, position) & !friendly,
            PieceKind::Rook => rook_attacks(view, position) & !friendly,
            PieceKind::Queen => queen_attacks(view, position) & !friendly,
            PieceKind::King => king_moves(view, position, self.color),
        }
    }
}
