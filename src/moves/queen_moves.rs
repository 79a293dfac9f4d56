use crate::board_game::position::Position;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::board_view::BoardView;
use crate::moves::move_mask::MoveMask;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(view: &BoardView, from: Position) -> MoveMask {
    bishop_attacks(view, from) | rook_attacks(view, from)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
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
    fn queen_on_open_board_sees_twenty_seven_squares() {
        let placement = parse_placement("k7/8/8/8/3Q4/8/8/7K w").expect("placement should parse");
        let view = BoardView::new(&placement.board, &placement.register);
        // Neither king stands on one of the queen's lines.
        assert_eq!(queen_attacks(&view, at("d4")).count(), 27);
    }

    #[test]
    fn queen_attacks_match_union_with_blockers() {
        let placement = parse_placement("k7/8/3p4/8/3Q1p2/8/8/7K w").expect("placement should parse");
        let view = BoardView::new(&placement.board, &placement.register);
        let attacks = queen_attacks(&view, at("d4"));

        assert!(attacks.contains(at("d6")));
        assert!(!attacks.contains(at("d7")));
        assert!(attacks.contains(at("f4")));
        assert!(!attacks.contains(at("g4")));
    }
}
