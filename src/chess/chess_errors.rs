//! Errors returned by the match engine.
//!
//! Every variant here is recoverable: the engine guarantees that the match
//! state is exactly as it was before the failing call. A missing king is not
//! represented; it is an internal invariant violation and panics.

use crate::chess::chess_position::ChessPosition;

/// Why a source square cannot be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionFault {
    #[error("there is no piece on source position")]
    NoPieceOnSource,
    #[error("the chosen piece is not yours")]
    NotYourPiece,
    #[error("there are no possible moves for the chosen piece")]
    NoPossibleMoves,
}

/// Domain errors for the match engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid selection {position}: {fault}")]
    InvalidSelection {
        position: ChessPosition,
        fault: SelectionFault,
    },

    #[error("the chosen piece can't move from {from} to {to}")]
    IllegalMove { from: ChessPosition, to: ChessPosition },

    #[error("you can't put yourself in check")]
    SelfCheckViolation,

    #[error("invalid position '{0}': valid values are from a1 to h8")]
    InvalidPosition(String),

    #[error("the match is over")]
    MatchIsOver,

    #[error("invalid placement: {0}")]
    InvalidPlacement(String),
}

impl ChessError {
    pub(crate) fn selection(position: ChessPosition, fault: SelectionFault) -> Self {
        ChessError::InvalidSelection { position, fault }
    }
}
