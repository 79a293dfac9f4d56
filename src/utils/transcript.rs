//! Plain-text match transcripts.
//!
//! A tag-pair header block followed by one history line per move and the
//! result token, e.g.
//!
//! ```text
//! [Date "2024.05.01"]
//! [Event "Chess Arbiter Match"]
//! [Result "0-1"]
//!
//! 1. WHITE: P f2-f3
//! ...
//! 0-1
//! ```

use std::collections::BTreeMap;

use crate::chess::chess_match::ChessMatch;
use crate::chess::chess_types::Color;

pub fn write_transcript(chess_match: &ChessMatch) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Chess Arbiter Match".to_owned());
    headers.insert(
        "Date".to_owned(),
        chess_match.started_at().format("%Y.%m.%d").to_string(),
    );
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());

    write_transcript_with_headers(chess_match, &headers)
}

/// Writes `headers` (plus a computed `Result` tag) and the move history.
pub fn write_transcript_with_headers(
    chess_match: &ChessMatch,
    headers: &BTreeMap<String, String>,
) -> String {
    let result = result_token(chess_match);
    let mut headers = headers.clone();
    headers.insert("Result".to_owned(), result.to_owned());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_value(value)));
    }
    out.push('\n');

    for line in chess_match.move_history() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(result);
    out.push('\n');

    out
}

fn result_token(chess_match: &ChessMatch) -> &'static str {
    match chess_match.winner() {
        Some(Color::White) => "1-0",
        Some(Color::Black) => "0-1",
        None => "*",
    }
}

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
