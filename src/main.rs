use std::io::{self, BufRead, Write};

use chess_arbiter::chess::chess_match::ChessMatch;
use chess_arbiter::chess::chess_position::ChessPosition;
use chess_arbiter::config::AppConfig;
use chess_arbiter::moves::move_mask::MoveMask;
use chess_arbiter::utils::render_board::render_board;
use chess_arbiter::utils::transcript::write_transcript;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut chess_match = match &config.start_placement {
        Some(placement) => ChessMatch::from_placement(placement)?,
        None => ChessMatch::new(),
    };
    tracing::info!("chess-arbiter v{} starting", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !chess_match.is_over() {
        print_match(&chess_match, None, &config);

        let Some(input) = prompt(&mut lines, "Source: ")? else {
            return Ok(());
        };
        let source = match input.parse::<ChessPosition>() {
            Ok(source) => source,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        let mask = match chess_match.possible_moves(source) {
            Ok(mask) => mask,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        println!();
        print_match(&chess_match, Some(mask), &config);

        let Some(input) = prompt(&mut lines, "Target: ")? else {
            return Ok(());
        };
        let target = match input.parse::<ChessPosition>() {
            Ok(target) => target,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match chess_match.perform_chess_move(source, target) {
            Ok(Some(captured)) => println!("Captured: {captured}"),
            Ok(None) => {}
            Err(e) => println!("{e}"),
        }
        println!();
    }

    print_match(&chess_match, None, &config);
    println!("CHECKMATE!");
    if let Some(winner) = chess_match.winner() {
        println!("Winner: {winner}");
    }
    println!();
    print!("{}", write_transcript(&chess_match));

    Ok(())
}

fn print_match(chess_match: &ChessMatch, highlight: Option<MoveMask>, config: &AppConfig) {
    println!(
        "{}",
        render_board(&chess_match.pieces(), highlight, config.glyph_style)
    );
    println!();

    let captured: Vec<String> = chess_match
        .captured_pieces()
        .iter()
        .map(|piece| format!("{}:{}", piece.color, piece))
        .collect();
    println!("Captured pieces: [{}]", captured.join(", "));
    println!("Turn: {}", chess_match.turn());

    if !chess_match.is_over() {
        println!("Waiting player: {}", chess_match.current_player());
        if chess_match.check() {
            println!("CHECK!");
        }
    }

    if let Some(last) = chess_match.move_history().last() {
        println!("Last move: {last}");
    }
}

/// Prints `label` and reads one line. `None` means stdin was closed.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    lines.next().transpose()
}
