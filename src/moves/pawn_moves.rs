use crate::game_state::chess_types::{Color, Square};

/// Diagonal capture squares of a `color` pawn standing on `square`.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| square.offset(forward, d_col))
}

/// Squares a `color` pawn would have to stand on to attack `square`.
#[inline]
pub fn pawn_attack_origins(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let behind = -color.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| square.offset(behind, d_col))
}

#[cfg(test)]
mod tests {
    use super::{pawn_attack_origins, pawn_attacks};
    use crate::game_state::chess_types::{Color, Square};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        let attacks: Vec<_> = pawn_attacks(Color::White, sq(6, 4)).collect();
        assert_eq!(attacks, vec![sq(5, 3), sq(5, 5)]);
    }

    #[test]
    fn black_pawn_attacks_from_a7() {
        let attacks: Vec<_> = pawn_attacks(Color::Black, sq(1, 0)).collect();
        assert_eq!(attacks, vec![sq(2, 1)]);
    }

    #[test]
    fn attack_origins_sit_behind_the_target() {
        let white: Vec<_> = pawn_attack_origins(Color::White, sq(4, 4)).collect();
        assert_eq!(white, vec![sq(5, 3), sq(5, 5)]);
        let black: Vec<_> = pawn_attack_origins(Color::Black, sq(4, 4)).collect();
        assert_eq!(black, vec![sq(3, 3), sq(3, 5)]);
    }
}
