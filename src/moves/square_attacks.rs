//! Square control queries.
//!
//! "Attacks" differ from legality masks: they include squares held by the
//! attacker's own pieces (defended squares) and, for pawns, only the capture
//! diagonals. Kings use them to avoid stepping into controlled squares.

use crate::board_game::position::Position;
use crate::chess::chess_piece::ChessPiece;
use crate::chess::chess_types::{Color, PieceKind};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::board_view::BoardView;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_mask::MoveMask;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares controlled by `piece` standing on `from`.
pub fn piece_attacks(view: &BoardView, piece: &ChessPiece, from: Position) -> MoveMask {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(view, from),
        PieceKind::Rook => rook_attacks(view, from),
        PieceKind::Queen => queen_attacks(view, from),
        PieceKind::King => king_attacks(from),
    }
}

pub fn is_square_attacked(view: &BoardView, square: Position, attacker_color: Color) -> bool {
    view.register()
        .on_board(attacker_color)
        .filter(|(_, from)| !view.is_empty(*from))
        .any(|(piece, from)| piece_attacks(view, piece, from).contains(square))
}

#[cfg(test)]
mod tests {
    use super::is_square_attacked;
    use crate::board_game::position::Position;
    use crate::chess::chess_position::ChessPosition;
    use crate::chess::chess_types::Color;
    use crate::moves::board_view::BoardView;
    use crate::utils::fen_parser::parse_placement;

    fn at(square: &str) -> Position {
        square
            .parse::<ChessPosition>()
            .expect("test square should parse")
            .to_position()
    }

    #[test]
    fn pawns_attack_diagonally_not_forward() {
        let placement = parse_placement("4k3/8/8/8/8/8/4P3/4K3 w").expect("placement should parse");
        let view = BoardView::new(&placement.board, &placement.register);

        assert!(is_square_attacked(&view, at("d3"), Color::White));
        assert!(is_square_attacked(&view, at("f3"), Color::White));
        assert!(!is_square_attacked(&view, at("e3"), Color::White));
    }

    #[test]
    fn vacated_square_no_longer_blocks() {
        let placement = parse_placement("4k3/8/8/8/8/8/8/r3K3 w").expect("placement should parse");
        let view = BoardView::new(&placement.board, &placement.register);

        assert!(!is_square_attacked(&view, at("f1"), Color::Black));
        assert!(is_square_attacked(&view.without(at("e1")), at("f1"), Color::Black));
    }
}
