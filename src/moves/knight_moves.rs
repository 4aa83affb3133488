use crate::game_state::chess_types::Square;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight jumps from `square`, ignoring occupancy.
#[inline]
pub fn knight_attacks(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        let d4 = Square::new(4, 3).expect("d4");
        assert_eq!(knight_attacks(d4).count(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let h8 = Square::new(0, 7).expect("h8");
        let targets: Vec<_> = knight_attacks(h8).collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&Square::new(1, 5).expect("f7")));
        assert!(targets.contains(&Square::new(2, 6).expect("g6")));
    }
}
