//! Move history entries.
//!
//! A `MoveRecord` is built once a move has been validated, executed and
//! classified. Its `Display` output is the history line shown to players:
//!
//! ```text
//! 1. WHITE: P e2-e4
//! 2. WHITE: P e4xd5 (P)
//! 4. BLACK: Q d8-h4 #
//! ```

use std::fmt;

use crate::chess::chess_position::ChessPosition;
use crate::chess::chess_types::{Color, PieceKind};

pub const CAPTURE_MARKER: char = 'x';
pub const MOVE_MARKER: char = '-';
pub const CHECK_MARKER: char = '+';
pub const CHECKMATE_MARKER: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub turn: u32,
    pub color: Color,
    pub piece: PieceKind,
    pub source: ChessPosition,
    pub target: ChessPosition,
    pub captured: Option<PieceKind>,
    pub check: bool,
    pub check_mate: bool,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.captured.is_some() {
            CAPTURE_MARKER
        } else {
            MOVE_MARKER
        };
        write!(
            f,
            "{}. {}: {} {}{}{}",
            self.turn, self.color, self.piece, self.source, separator, self.target
        )?;

        if let Some(captured) = self.captured {
            write!(f, " ({captured})")?;
        }

        if self.check_mate {
            write!(f, " {CHECKMATE_MARKER}")
        } else if self.check {
            write!(f, " {CHECK_MARKER}")
        } else {
            Ok(())
        }
    }
}
