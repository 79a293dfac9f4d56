use crate::board_game::position::Position;
use crate::moves::move_mask::MoveMask;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(from: Position) -> MoveMask {
    MoveMask::from_bits(KNIGHT_ATTACKS[from.index()])
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let column = (sq % 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row - 2, column + 1);
        attacks |= set_if_valid(row - 1, column + 2);
        attacks |= set_if_valid(row + 1, column + 2);
        attacks |= set_if_valid(row + 2, column + 1);
        attacks |= set_if_valid(row + 2, column - 1);
        attacks |= set_if_valid(row + 1, column - 2);
        attacks |= set_if_valid(row - 1, column - 2);
        attacks |= set_if_valid(row - 2, column - 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, column: i32) -> u64 {
    if row < 0 || row > 7 || column < 0 || column > 7 {
        return 0;
    }

    1u64 << ((row as usize) * 8 + (column as usize))
}

#[cfg(test)]
mod tests {
    use super::knight_attacks;
    use crate::board_game::position::Position;

    #[test]
    fn knight_in_center_has_eight_targets() {
        let d4 = Position::new(4, 3).expect("on board");
        assert_eq!(knight_attacks(d4).count(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let a1 = Position::new(7, 0).expect("on board");
        let attacks = knight_attacks(a1);
        assert_eq!(attacks.count(), 2);
        assert!(attacks.contains(Position::new(5, 1).expect("b3")));
        assert!(attacks.contains(Position::new(6, 2).expect("c2")));
    }
}
