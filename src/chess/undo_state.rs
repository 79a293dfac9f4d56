use crate::board_game::position::Position;
use crate::chess::chess_piece::PieceId;

/// Everything needed to reverse one executed move exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub source: Position,
    pub target: Position,
    pub moved_piece: PieceId,
    pub captured_piece: Option<PieceId>,
}
