//! Terminal board renderer.
//!
//! Draws a `ChessMatch::pieces()` snapshot with rank numbers on the left and
//! file letters underneath. Empty squares print as `-`. When a legality mask
//! is supplied, reachable empty squares print as `*` and reachable occupied
//! squares get a trailing `*`.

use std::str::FromStr;

use crate::board_game::position::{Position, BOARD_SIZE};
use crate::chess::chess_piece::ChessPiece;
use crate::chess::chess_types::{Color, PieceKind};
use crate::moves::move_mask::MoveMask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    /// Upper case for white, lower case for black.
    #[default]
    Letters,
    Unicode,
}

impl FromStr for GlyphStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "letters" | "ascii" => Ok(GlyphStyle::Letters),
            "unicode" => Ok(GlyphStyle::Unicode),
            other => Err(format!("unknown glyph style: {other}")),
        }
    }
}

pub fn render_board(
    pieces: &[[Option<ChessPiece>; BOARD_SIZE]; BOARD_SIZE],
    highlight: Option<MoveMask>,
    style: GlyphStyle,
) -> String {
    let highlight = highlight.unwrap_or_default();
    let mut out = String::new();

    for (row, rank) in pieces.iter().enumerate() {
        let mut line = format!("{} ", BOARD_SIZE - row);

        for (column, square) in rank.iter().enumerate() {
            let marked = Position::new(row, column).is_some_and(|p| highlight.contains(p));
            match (square, marked) {
                (Some(piece), true) => {
                    line.push(piece_glyph(piece, style));
                    line.push('*');
                }
                (Some(piece), false) => {
                    line.push(piece_glyph(piece, style));
                    line.push(' ');
                }
                (None, true) => line.push_str("* "),
                (None, false) => line.push_str("- "),
            }
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

fn piece_glyph(piece: &ChessPiece, style: GlyphStyle) -> char {
    match style {
        GlyphStyle::Letters => match piece.color {
            Color::White => piece.glyph(),
            Color::Black => piece.glyph().to_ascii_lowercase(),
        },
        GlyphStyle::Unicode => piece_to_unicode(piece.color, piece.kind),
    }
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
