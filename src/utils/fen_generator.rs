//! Placement-string generator, the inverse of `fen_parser`.

use crate::board_game::position::{Position, BOARD_SIZE};
use crate::chess::chess_piece::ChessPiece;
use crate::chess::chess_types::Color;
use crate::moves::board_view::BoardView;

pub fn generate_placement(view: &BoardView, current_player: Color) -> String {
    let side_to_move = match current_player {
        Color::White => "w",
        Color::Black => "b",
    };
    format!("{} {}", generate_board_field(view), side_to_move)
}

fn generate_board_field(view: &BoardView) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_count = 0u8;

        for column in 0..BOARD_SIZE {
            let piece = Position::new(row, column).and_then(|position| view.piece_at(position));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: &ChessPiece) -> char {
    match piece.color {
        Color::White => piece.glyph(),
        Color::Black => piece.glyph().to_ascii_lowercase(),
    }
}
