use crate::board_game::position::Position;
use crate::moves::board_view::BoardView;
use crate::moves::move_mask::MoveMask;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares a rook on `from` controls: each orthogonal ray up to and including
/// the first occupied square.
pub fn rook_attacks(view: &BoardView, from: Position) -> MoveMask {
    let mut attacks = MoveMask::EMPTY;
    for (d_row, d_column) in ROOK_DIRECTIONS {
        attacks |= view.trace_ray(from, d_row, d_column);
    }
    attacks
}

#[cfg(test)]
mod tests {
    use super::rook_attacks;
    use crate::chess::chess_position::ChessPosition;
    use crate::moves::board_view::BoardView;
    use crate::utils::fen_parser::parse_placement;

    fn at(square: &str) -> crate::board_game::position::Position {
        square
            .parse::<ChessPosition>()
            .expect("test square should parse")
            .to_position()
    }

    #[test]
    fn rook_on_open_board_sees_fourteen_squares() {
        let placement = parse_placement("k7/8/8/8/3R4/8/8/7K w").expect("placement should parse");
        let view = BoardView::new(&placement.board, &placement.register);
        assert_eq!(rook_attacks(&view, at("d4")).count(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let placement = parse_placement("k7/8/8/8/p7/8/8/R6K w").expect("placement should parse");
        let view = BoardView::new(&placement.board, &placement.register);
        let attacks = rook_attacks(&view, at("a1"));

        assert!(attacks.contains(at("a4")));
        assert!(!attacks.contains(at("a5")));
        // The h1 king is the first blocker on the rank and is included.
        assert!(attacks.contains(at("h1")));
    }
}
