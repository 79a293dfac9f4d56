//! Crate root module declarations for the chess arbiter.
//!
//! The crate is a two-player match engine: board storage, the per-piece
//! movement capabilities, the match engine enforcing check and checkmate, and
//! console utilities (rendering, placement strings, transcripts) used by the
//! interactive binary.

pub mod board_game {
    pub mod board;
    pub mod position;
}

pub mod chess {
    pub mod chess_errors;
    pub mod chess_match;
    pub mod chess_piece;
    pub mod chess_position;
    pub mod chess_types;
    pub mod move_recorder;
    pub mod piece_register;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod board_view;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_mask;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod square_attacks;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
    pub mod transcript;
}

pub mod config;
