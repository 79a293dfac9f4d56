//! Single registry of every piece placed during a match.
//!
//! Each entry is tagged `OnBoard(position)` or `Captured`, so the live roster
//! and the captured roster are two views over one collection and can never
//! overlap.

use crate::board_game::position::Position;
use crate::chess::chess_piece::{ChessPiece, PieceId, PieceStatus};
use crate::chess::chess_types::{Color, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub piece: ChessPiece,
    pub status: PieceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceRegister {
    records: Vec<PieceRecord>,
}

impl PieceRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new piece standing on `position` and returns its id.
    pub fn add(&mut self, kind: PieceKind, color: Color, position: Position) -> PieceId {
        let id = PieceId(self.records.len());
        self.records.push(PieceRecord {
            piece: ChessPiece::new(id, kind, color),
            status: PieceStatus::OnBoard(position),
        });
        id
    }

    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&ChessPiece> {
        self.records.get(id.0).map(|record| &record.piece)
    }

    #[inline]
    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut ChessPiece> {
        self.records.get_mut(id.0).map(|record| &mut record.piece)
    }

    #[inline]
    pub fn status(&self, id: PieceId) -> Option<PieceStatus> {
        self.records.get(id.0).map(|record| record.status)
    }

    pub fn set_status(&mut self, id: PieceId, status: PieceStatus) {
        if let Some(record) = self.records.get_mut(id.0) {
            record.status = status;
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Live pieces of one colour together with their squares.
    pub fn on_board(&self, color: Color) -> impl Iterator<Item = (&ChessPiece, Position)> + '_ {
        self.records.iter().filter_map(move |record| match record.status {
            PieceStatus::OnBoard(position) if record.piece.color == color => {
                Some((&record.piece, position))
            }
            _ => None,
        })
    }

    pub fn all_on_board(&self) -> impl Iterator<Item = (&ChessPiece, Position)> + '_ {
        self.records.iter().filter_map(|record| match record.status {
            PieceStatus::OnBoard(position) => Some((&record.piece, position)),
            PieceStatus::Captured => None,
        })
    }

    pub fn captured(&self) -> impl Iterator<Item = &ChessPiece> + '_ {
        self.records
            .iter()
            .filter(|record| record.status == PieceStatus::Captured)
            .map(|record| &record.piece)
    }

    /// Finds the live king of `color`.
    pub fn king(&self, color: Color) -> Option<(&ChessPiece, Position)> {
        self.on_board(color)
            .find(|(piece, _)| piece.kind == PieceKind::King)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, column: usize) -> Position {
        Position::new(row, column).expect("test position should be on the board")
    }

    #[test]
    fn capture_and_restore_are_status_transitions() {
        let mut register = PieceRegister::new();
        let king = register.add(PieceKind::King, Color::White, pos(7, 4));
        let pawn = register.add(PieceKind::Pawn, Color::Black, pos(1, 0));

        assert_eq!(register.on_board(Color::Black).count(), 1);
        assert_eq!(register.captured().count(), 0);

        register.set_status(pawn, PieceStatus::Captured);
        assert_eq!(register.on_board(Color::Black).count(), 0);
        assert_eq!(register.captured().map(|p| p.id).collect::<Vec<_>>(), vec![pawn]);

        register.set_status(pawn, PieceStatus::OnBoard(pos(1, 0)));
        assert_eq!(register.captured().count(), 0);
        assert_eq!(register.all_on_board().count(), 2);

        assert_eq!(register.king(Color::White).map(|(p, at)| (p.id, at)), Some((king, pos(7, 4))));
        assert!(register.king(Color::Black).is_none());
    }

    #[test]
    fn move_count_is_mutable_through_the_register() {
        let mut register = PieceRegister::new();
        let rook = register.add(PieceKind::Rook, Color::Black, pos(0, 0));

        if let Some(piece) = register.get_mut(rook) {
            piece.increase_move_count();
            piece.increase_move_count();
            piece.decrease_move_count();
        }
        assert_eq!(register.get(rook).map(|p| p.move_count), Some(1));
        assert_eq!(register.len(), 1);
    }
}
