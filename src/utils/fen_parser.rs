//! Placement-string parser.
//!
//! Reads the piece-placement field of a FEN string followed by the active
//! colour (`"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"`) into a board and
//! piece register. Castling, en-passant and clock fields are accepted but
//! ignored since the engine does not track them.

use crate::board_game::board::Board;
use crate::board_game::position::Position;
use crate::chess::chess_errors::ChessError;
use crate::chess::chess_types::{Color, PieceKind};
use crate::chess::piece_register::PieceRegister;

/// Board, register and side to move built from a placement string.
#[derive(Debug, Clone)]
pub struct Placement {
    pub board: Board,
    pub register: PieceRegister,
    pub current_player: Color,
}

pub fn parse_placement(placement: &str) -> Result<Placement, ChessError> {
    let mut parts = placement.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().unwrap_or("w");

    let mut board = Board::new();
    let mut register = PieceRegister::new();
    parse_board(board_part, &mut board, &mut register)?;

    for color in [Color::White, Color::Black] {
        let kings = register
            .on_board(color)
            .filter(|(piece, _)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(invalid(&format!("expected one {color} king, found {kings}")));
        }
    }

    Ok(Placement {
        board,
        register,
        current_player: parse_side_to_move(side_part)?,
    })
}

fn parse_board(
    board_part: &str,
    board: &mut Board,
    register: &mut PieceRegister,
) -> Result<(), ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut column = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                column += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            let position = Position::new(row, column)
                .ok_or_else(|| invalid("board rank has too many files"))?;

            let id = register.add(kind, color, position);
            if kind == PieceKind::Pawn && row != color.pawn_home_row() {
                if let Some(pawn) = register.get_mut(id) {
                    pawn.increase_move_count();
                }
            }
            board.place_piece(id, position);
            column += 1;
        }

        if column != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_glyph(ch).map(|kind| (color, kind))
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidPlacement(reason.to_owned())
}
