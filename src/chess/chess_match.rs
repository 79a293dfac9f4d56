//! The match engine.
//!
//! `ChessMatch` owns the board, the piece register, turn state and move
//! history. Every public mutation goes through `perform_chess_move`, which
//! validates, executes, guards against self-check (rolling back before the
//! error surfaces), classifies check/checkmate, records history and advances
//! the turn.
//!
//! Check and checkmate detection reuse one make/undo primitive:
//! `make_move` returns an `UndoState` that `undo_move` reverses exactly. The
//! checkmate search only ever runs hypotheses through `with_move_simulated`,
//! which always reverts before returning.

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::board_game::board::Board;
use crate::board_game::position::{Position, BOARD_SIZE};
use crate::chess::chess_errors::{ChessError, SelectionFault};
use crate::chess::chess_piece::{ChessPiece, PieceId, PieceStatus};
use crate::chess::chess_position::ChessPosition;
use crate::chess::chess_types::{Color, PieceKind};
use crate::chess::move_recorder::MoveRecord;
use crate::chess::piece_register::PieceRegister;
use crate::chess::undo_state::UndoState;
use crate::moves::board_view::BoardView;
use crate::moves::move_mask::MoveMask;
use crate::moves::piece_moves::MovementCapability;
use crate::utils::fen_generator::generate_placement;
use crate::utils::fen_parser::parse_placement;

/// Standard starting layout in placement notation.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone)]
pub struct ChessMatch {
    turn: u32,
    current_player: Color,
    board: Board,
    register: PieceRegister,
    check: bool,
    check_mate: bool,
    move_history: Vec<MoveRecord>,
    started_at: DateTime<Local>,
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessMatch {
    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// A new match from the standard initial setup, white to move.
    pub fn new() -> Self {
        let mut chess_match = Self::empty(Color::White);
        chess_match.initial_setup();
        chess_match
    }

    /// Builds a match from a placement string such as `"4k3/8/8/8/8/8/8/4K2R w"`.
    ///
    /// Each side needs exactly one king and the side that just moved may not
    /// be left in check. Check and checkmate flags are computed for the side
    /// to move, so a mated layout yields a match that is already over.
    pub fn from_placement(placement: &str) -> Result<Self, ChessError> {
        let parsed = parse_placement(placement)?;
        let mut chess_match = Self {
            board: parsed.board,
            register: parsed.register,
            ..Self::empty(parsed.current_player)
        };

        if chess_match.test_check(chess_match.opponent_player()) {
            return Err(ChessError::InvalidPlacement(format!(
                "{} is in check but it is not their move",
                chess_match.opponent_player()
            )));
        }

        let current = chess_match.current_player;
        chess_match.check = chess_match.test_check(current);
        chess_match.check_mate = chess_match.check && chess_match.test_check_mate(current);
        Ok(chess_match)
    }

    fn empty(current_player: Color) -> Self {
        Self {
            turn: 1,
            current_player,
            board: Board::new(),
            register: PieceRegister::new(),
            check: false,
            check_mate: false,
            move_history: Vec::new(),
            started_at: Local::now(),
        }
    }

    fn initial_setup(&mut self) {
        for position in Position::all() {
            let color = match position.row() {
                0 | 1 => Color::Black,
                6 | 7 => Color::White,
                _ => continue,
            };
            let kind = if position.row() == color.pawn_home_row() {
                PieceKind::Pawn
            } else {
                BACK_RANK[position.column()]
            };
            self.place_new_piece(position, kind, color);
        }
    }

    fn place_new_piece(&mut self, position: Position, kind: PieceKind, color: Color) {
        let id = self.register.add(kind, color, position);
        self.board.place_piece(id, position);
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn opponent_player(&self) -> Color {
        self.current_player.opposite()
    }

    /// Whether the side to move (or, after checkmate, the mated side) is in check.
    pub fn check(&self) -> bool {
        self.check
    }

    pub fn check_mate(&self) -> bool {
        self.check_mate
    }

    pub fn is_over(&self) -> bool {
        self.check_mate
    }

    /// The side that delivered checkmate. The turn does not advance on the
    /// mating move, so this is the current player.
    pub fn winner(&self) -> Option<Color> {
        self.check_mate.then_some(self.current_player)
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Row-major snapshot of the board, `pieces()[row][column]`.
    pub fn pieces(&self) -> [[Option<ChessPiece>; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[None; BOARD_SIZE]; BOARD_SIZE];
        for row in 0..self.board.rows() {
            for column in 0..self.board.columns() {
                grid[row][column] = Position::new(row, column).and_then(|at| self.piece_at(at));
            }
        }
        grid
    }

    pub fn pieces_on_the_board(&self) -> Vec<ChessPiece> {
        self.register
            .all_on_board()
            .map(|(piece, _)| *piece)
            .collect()
    }

    pub fn captured_pieces(&self) -> Vec<ChessPiece> {
        self.register.captured().copied().collect()
    }

    /// Formatted history lines, oldest first.
    pub fn move_history(&self) -> Vec<String> {
        self.move_history.iter().map(ToString::to_string).collect()
    }

    pub fn move_records(&self) -> &[MoveRecord] {
        &self.move_history
    }

    /// Current layout and side to move in placement notation.
    pub fn placement(&self) -> String {
        generate_placement(&self.view(), self.current_player)
    }

    // -----------------------------------------------------------------
    // Moves
    // -----------------------------------------------------------------

    /// Legality mask of the current player's piece on `source_position`.
    pub fn possible_moves(&self, source_position: ChessPosition) -> Result<MoveMask, ChessError> {
        self.ensure_in_progress()?;
        let position = source_position.to_position();
        let piece = self.validate_source_position(position)?;
        Ok(piece.possible_moves(&self.view(), position))
    }

    /// Plays one full turn for the current player.
    ///
    /// Returns the captured piece, if any. On error the match is left exactly
    /// as it was before the call.
    ///
    /// # Panics
    ///
    /// Panics if either king is missing from the board, which can only happen
    /// through a bug in move execution.
    pub fn perform_chess_move(
        &mut self,
        source_position: ChessPosition,
        target_position: ChessPosition,
    ) -> Result<Option<ChessPiece>, ChessError> {
        self.ensure_in_progress()?;
        let source = source_position.to_position();
        let target = target_position.to_position();

        let moved_piece = self.validate_source_position(source)?;
        self.validate_target_position(&moved_piece, source, target)?;

        let undo = self.make_move(moved_piece.id, source, target);

        if self.test_check(self.current_player) {
            self.undo_move(undo);
            debug!(
                player = %self.current_player,
                "rolled back {source_position}-{target_position}: own king left in check"
            );
            return Err(ChessError::SelfCheckViolation);
        }

        let opponent = self.opponent_player();
        self.check = self.test_check(opponent);
        self.check_mate = self.check && self.test_check_mate(opponent);

        let captured_piece = undo
            .captured_piece
            .and_then(|id| self.register.get(id))
            .copied();
        self.register_move(
            moved_piece.kind,
            source_position,
            target_position,
            captured_piece.map(|piece| piece.kind),
        );
        debug!(
            turn = self.turn,
            player = %self.current_player,
            "performed {}",
            self.move_history.last().map(ToString::to_string).unwrap_or_default()
        );

        if self.check_mate {
            info!(winner = %self.current_player, turn = self.turn, "checkmate");
        } else {
            if self.check {
                info!(player = %opponent, "check");
            }
            self.next_turn();
        }

        Ok(captured_piece)
    }

    fn ensure_in_progress(&self) -> Result<(), ChessError> {
        if self.check_mate {
            return Err(ChessError::MatchIsOver);
        }
        Ok(())
    }

    fn validate_source_position(&self, position: Position) -> Result<ChessPiece, ChessError> {
        let chess_position = ChessPosition::from_position(position);
        let piece = self
            .piece_at(position)
            .ok_or_else(|| ChessError::selection(chess_position, SelectionFault::NoPieceOnSource))?;

        if piece.color != self.current_player {
            return Err(ChessError::selection(
                chess_position,
                SelectionFault::NotYourPiece,
            ));
        }
        if !piece.is_there_any_possible_move(&self.view(), position) {
            return Err(ChessError::selection(
                chess_position,
                SelectionFault::NoPossibleMoves,
            ));
        }

        Ok(piece)
    }

    fn validate_target_position(
        &self,
        piece: &ChessPiece,
        source: Position,
        target: Position,
    ) -> Result<(), ChessError> {
        if !piece.can_move_to(&self.view(), source, target) {
            return Err(ChessError::IllegalMove {
                from: ChessPosition::from_position(source),
                to: ChessPosition::from_position(target),
            });
        }
        Ok(())
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = self.current_player.opposite();
    }

    fn register_move(
        &mut self,
        piece: PieceKind,
        source: ChessPosition,
        target: ChessPosition,
        captured: Option<PieceKind>,
    ) {
        self.move_history.push(MoveRecord {
            turn: self.turn,
            color: self.current_player,
            piece,
            source,
            target,
            captured,
            check: self.check,
            check_mate: self.check_mate,
        });
    }

    // -----------------------------------------------------------------
    // Make / undo
    // -----------------------------------------------------------------

    fn make_move(&mut self, moved_piece: PieceId, source: Position, target: Position) -> UndoState {
        self.board.remove_piece(source);
        if let Some(piece) = self.register.get_mut(moved_piece) {
            piece.increase_move_count();
        }

        let captured_piece = self.board.remove_piece(target);
        self.board.place_piece(moved_piece, target);
        self.register
            .set_status(moved_piece, PieceStatus::OnBoard(target));

        if let Some(captured) = captured_piece {
            self.register.set_status(captured, PieceStatus::Captured);
        }

        UndoState {
            source,
            target,
            moved_piece,
            captured_piece,
        }
    }

    fn undo_move(&mut self, undo: UndoState) {
        self.board.remove_piece(undo.target);
        self.board.place_piece(undo.moved_piece, undo.source);
        if let Some(piece) = self.register.get_mut(undo.moved_piece) {
            piece.decrease_move_count();
        }
        self.register
            .set_status(undo.moved_piece, PieceStatus::OnBoard(undo.source));

        if let Some(captured) = undo.captured_piece {
            self.board.place_piece(captured, undo.target);
            self.register
                .set_status(captured, PieceStatus::OnBoard(undo.target));
        }
    }

    /// Plays a move, evaluates `probe` on the resulting state, then reverts.
    fn with_move_simulated<R>(
        &mut self,
        moved_piece: PieceId,
        source: Position,
        target: Position,
        probe: impl FnOnce(&Self) -> R,
    ) -> R {
        let undo = self.make_move(moved_piece, source, target);
        let result = probe(self);
        self.undo_move(undo);
        result
    }

    // -----------------------------------------------------------------
    // Check detection
    // -----------------------------------------------------------------

    fn view(&self) -> BoardView<'_> {
        BoardView::new(&self.board, &self.register)
    }

    fn piece_at(&self, position: Position) -> Option<ChessPiece> {
        self.board
            .piece(position)
            .and_then(|id| self.register.get(id))
            .copied()
    }

    fn king(&self, color: Color) -> Position {
        match self.register.king(color) {
            Some((_, position)) => position,
            None => panic!("there is no {color} king on the board"),
        }
    }

    /// A colour is in check when any enemy legality mask covers its king.
    fn test_check(&self, color: Color) -> bool {
        let king_position = self.king(color);
        let view = self.view();
        self.register
            .on_board(color.opposite())
            .any(|(piece, position)| piece.can_move_to(&view, position, king_position))
    }

    /// Exhaustively tries every move of `color`; stops at the first escape.
    fn test_check_mate(&mut self, color: Color) -> bool {
        if !self.test_check(color) {
            return false;
        }

        let candidates: Vec<(PieceId, Position, MoveMask)> = {
            let view = self.view();
            self.register
                .on_board(color)
                .map(|(piece, position)| (piece.id, position, piece.possible_moves(&view, position)))
                .collect()
        };

        for (piece, source, targets) in candidates {
            for target in targets.positions() {
                let escapes =
                    self.with_move_simulated(piece, source, target, |m| !m.test_check(color));
                if escapes {
                    return false;
                }
            }
        }

        true
    }
}
