use crate::board_game::position::Position;
use crate::chess::chess_types::Color;
use crate::moves::board_view::BoardView;
use crate::moves::move_mask::MoveMask;
use crate::moves::square_attacks::is_square_attacked;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(from: Position) -> MoveMask {
    MoveMask::from_bits(KING_ATTACKS[from.index()])
}

/// Neighbouring squares the king may step to: not held by a friendly piece
/// and not controlled by the enemy once the king has left `from`.
pub fn king_moves(view: &BoardView, from: Position, color: Color) -> MoveMask {
    let vacated = view.without(from);
    let mut moves = king_attacks(from) & !view.occupied_by(color);
    for target in moves.positions() {
        if is_square_attacked(&vacated, target, color.opposite()) {
            moves.clear(target);
        }
    }
    moves
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let column = (sq % 8) as i32;
        let mut attacks = 0u64;

        let mut d_row = -1;
        while d_row <= 1 {
            let mut d_column = -1;
            while d_column <= 1 {
                let r = row + d_row;
                let c = column + d_column;
                if (d_row != 0 || d_column != 0) && r >= 0 && r < 8 && c >= 0 && c < 8 {
                    attacks |= 1u64 << ((r as usize) * 8 + (c as usize));
                }
                d_column += 1;
            }
            d_row += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
