//! Legality masks.
//!
//! A `MoveMask` marks the squares a piece may move to. It is stored as a
//! 64-bit set indexed by `Position::index()` and can be expanded into the
//! 8x8 boolean grid consumed by renderers.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::board_game::position::{Position, BOARD_SIZE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveMask(u64);

impl MoveMask {
    pub const EMPTY: MoveMask = MoveMask(0);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub fn set(&mut self, position: Position) {
        self.0 |= 1u64 << position.index();
    }

    #[inline]
    pub fn clear(&mut self, position: Position) {
        self.0 &= !(1u64 << position.index());
    }

    #[inline]
    pub const fn contains(self, position: Position) -> bool {
        self.0 & (1u64 << position.index()) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Marked squares in ascending index order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Position::from_index(index)
        })
    }

    /// Row-major boolean grid, `grid[row][column]`.
    pub fn to_grid(self) -> [[bool; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[false; BOARD_SIZE]; BOARD_SIZE];
        for position in self.positions() {
            grid[position.row()][position.column()] = true;
        }
        grid
    }
}

impl FromIterator<Position> for MoveMask {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut mask = MoveMask::EMPTY;
        for position in iter {
            mask.set(position);
        }
        mask
    }
}

impl BitOr for MoveMask {
    type Output = MoveMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        MoveMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for MoveMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for MoveMask {
    type Output = MoveMask;

    fn bitand(self, rhs: Self) -> Self::Output {
        MoveMask(self.0 & rhs.0)
    }
}

impl Not for MoveMask {
    type Output = MoveMask;

    fn not(self) -> Self::Output {
        MoveMask(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_matches_marked_squares() {
        let e4 = Position::new(4, 4).expect("on board");
        let a8 = Position::new(0, 0).expect("on board");
        let mask: MoveMask = [e4, a8].into_iter().collect();

        let grid = mask.to_grid();
        assert!(grid[4][4]);
        assert!(grid[0][0]);
        assert_eq!(grid.iter().flatten().filter(|x| **x).count(), 2);
        assert_eq!(mask.positions().collect::<Vec<_>>(), vec![a8, e4]);
    }

    #[test]
    fn clearing_and_set_operations() {
        let d5 = Position::new(3, 3).expect("on board");
        let mut mask = MoveMask::EMPTY;
        assert!(mask.is_empty());
        mask.set(d5);
        assert!(mask.contains(d5));
        assert_eq!((mask & !mask), MoveMask::EMPTY);
        mask.clear(d5);
        assert!(mask.is_empty());
    }
}
