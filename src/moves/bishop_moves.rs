use crate::board_game::position::Position;
use crate::moves::board_view::BoardView;
use crate::moves::move_mask::MoveMask;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn bishop_attacks(view: &BoardView, from: Position) -> MoveMask {
    let mut attacks = MoveMask::EMPTY;
    for (d_row, d_column) in BISHOP_DIRECTIONS {
        attacks |= view.trace_ray(from, d_row, d_column);
    }
    attacks
}
