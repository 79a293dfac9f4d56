use crate::board_game::position::Position;
use crate::chess::chess_types::Color;
use crate::moves::board_view::BoardView;
use crate::moves::move_mask::MoveMask;

/// The two forward diagonals a pawn controls, whether or not they are occupied.
pub fn pawn_attacks(from: Position, color: Color) -> MoveMask {
    [-1i8, 1i8]
        .into_iter()
        .filter_map(|d_column| from.offset(color.forward(), d_column))
        .collect()
}

/// Forward pushes onto empty squares (two on the pawn's first move) plus
/// diagonal captures of enemy pieces.
pub fn pawn_moves(view: &BoardView, from: Position, color: Color, move_count: u32) -> MoveMask {
    let mut moves = MoveMask::EMPTY;

    if let Some(one_step) = from.offset(color.forward(), 0) {
        if view.is_empty(one_step) {
            moves.set(one_step);

            if move_count == 0 {
                if let Some(two_step) = one_step.offset(color.forward(), 0) {
                    if view.is_empty(two_step) {
                        moves.set(two_step);
                    }
                }
            }
        }
    }

    for target in pawn_attacks(from, color).positions() {
        if view.is_opponent_piece(target, color) {
            moves.set(target);
        }
    }

    moves
}
