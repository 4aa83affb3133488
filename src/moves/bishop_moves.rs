//! Bishop reach on the mailbox board.
//!
//! Diagonal rays that stop on the first occupied square. Used by move
//! generation and, through the direction table, by the attack detector.

use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::moves::sliding_rays::trace_rays;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_attacks(game_state: &GameState, square: Square) -> Vec<Square> {
    trace_rays(game_state, square, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::{chess_types::{Color, Piece, PieceKind, Square}, game_state::GameState};

    #[test]
    fn bishop_on_empty_d4_reaches_thirteen_squares() {
        let d4 = Square::new(4, 3).expect("d4");
        assert_eq!(bishop_attacks(&GameState::new_empty(), d4).len(), 13);
    }

    #[test]
    fn bishop_blocker_stops_ray() {
        let mut game = GameState::new_empty();
        let c1 = Square::new(7, 2).expect("c1");
        let e3 = Square::new(5, 4).expect("e3");
        let f4 = Square::new(4, 5).expect("f4");
        game.place_piece(e3, Piece::new(Color::Black, PieceKind::Knight));

        let attacks = bishop_attacks(&game, c1);

        assert!(attacks.contains(&e3));
        assert!(!attacks.contains(&f4));
    }
}
