//! User-facing square coordinates (`a1` .. `h8`).
//!
//! Converts between chess notation and the zero-based `Position` used by the
//! board via `row = 8 - rank` and `column = file - 'a'`.

use std::fmt;
use std::str::FromStr;

use crate::board_game::position::Position;
use crate::chess::chess_errors::ChessError;

/// A (file letter, rank number) pair. Always within `a..=h` / `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPosition {
    column: char,
    row: u8,
}

impl ChessPosition {
    pub fn new(column: char, row: u8) -> Result<Self, ChessError> {
        if !('a'..='h').contains(&column) || !(1..=8).contains(&row) {
            return Err(ChessError::InvalidPosition(format!("{column}{row}")));
        }
        Ok(Self { column, row })
    }

    #[inline]
    pub const fn column(self) -> char {
        self.column
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    pub fn to_position(self) -> Position {
        let row = 8 - self.row as usize;
        let column = (self.column as u8 - b'a') as usize;
        // Both coordinates were range-checked on construction.
        Position::new(row, column).unwrap_or_else(|| unreachable!())
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            column: char::from(b'a' + position.column() as u8),
            row: 8 - position.row() as u8,
        }
    }
}

impl From<Position> for ChessPosition {
    fn from(position: Position) -> Self {
        Self::from_position(position)
    }
}

impl From<ChessPosition> for Position {
    fn from(position: ChessPosition) -> Self {
        position.to_position()
    }
}

impl FromStr for ChessPosition {
    type Err = ChessError;

    /// Parses `"e2"`-style input, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(column), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessError::InvalidPosition(trimmed.to_owned()));
        };
        let row = rank
            .to_digit(10)
            .ok_or_else(|| ChessError::InvalidPosition(trimmed.to_owned()))?;
        Self::new(column.to_ascii_lowercase(), row as u8)
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_map_to_expected_positions() {
        let a8 = ChessPosition::new('a', 8).expect("a8 is valid");
        assert_eq!(a8.to_position(), Position::new(0, 0).expect("on board"));

        let h1 = ChessPosition::new('h', 1).expect("h1 is valid");
        assert_eq!(h1.to_position(), Position::new(7, 7).expect("on board"));

        let e2 = ChessPosition::new('e', 2).expect("e2 is valid");
        assert_eq!(e2.to_position(), Position::new(6, 4).expect("on board"));
    }

    #[test]
    fn conversion_is_a_bijection_over_all_squares() {
        let mut seen = std::collections::HashSet::new();
        for position in Position::all() {
            let chess = ChessPosition::from_position(position);
            assert_eq!(chess.to_position(), position);
            assert!(seen.insert(chess));
        }
        assert_eq!(seen.len(), 64);

        for column in 'a'..='h' {
            for row in 1..=8u8 {
                let chess = ChessPosition::new(column, row).expect("valid square");
                assert_eq!(ChessPosition::from_position(chess.to_position()), chess);
            }
        }
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(ChessPosition::new('i', 1).is_err());
        assert!(ChessPosition::new('`', 1).is_err());
        assert!(ChessPosition::new('A', 1).is_err());
        assert!(ChessPosition::new('a', 0).is_err());
        assert!(ChessPosition::new('a', 9).is_err());
    }

    #[test]
    fn parses_user_input() {
        let parsed: ChessPosition = " E4 ".parse().expect("e4 should parse");
        assert_eq!(parsed, ChessPosition::new('e', 4).expect("valid"));
        assert_eq!(parsed.to_string(), "e4");

        assert!("e".parse::<ChessPosition>().is_err());
        assert!("e44".parse::<ChessPosition>().is_err());
        assert!("z1".parse::<ChessPosition>().is_err());
        assert!("ex".parse::<ChessPosition>().is_err());
    }
}
