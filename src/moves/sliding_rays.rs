//! Ray walking over the mailbox board.
//!
//! Shared by bishop, rook and queen movement and by the attack detector.

use crate::game_state::{chess_types::Square, game_state::GameState};

/// Squares along one direction, up to and including the first occupied one.
pub fn trace_ray(game_state: &GameState, from: Square, d_row: i8, d_col: i8) -> Vec<Square> {
    let mut out = Vec::with_capacity(7);
    let mut current = from;

    while let Some(next) = current.offset(d_row, d_col) {
        out.push(next);
        if !game_state.is_empty(next) {
            break;
        }
        current = next;
    }

    out
}

/// First occupied square along a direction, if any.
pub fn first_blocker(game_state: &GameState, from: Square, d_row: i8, d_col: i8) -> Option<Square> {
    trace_ray(game_state, from, d_row, d_col)
        .last()
        .copied()
        .filter(|sq| !game_state.is_empty(*sq))
}

/// Union of `trace_ray` over several directions.
pub fn trace_rays(game_state: &GameState, from: Square, directions: &[(i8, i8)]) -> Vec<Square> {
    directions
        .iter()
        .flat_map(|&(d_row, d_col)| trace_ray(game_state, from, d_row, d_col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn open_ray_runs_to_the_edge() {
        let game = GameState::new_empty();
        let ray = trace_ray(&game, sq(7, 0), -1, 0);
        assert_eq!(ray.len(), 7);
        assert_eq!(ray.last(), Some(&sq(0, 0)));
        assert_eq!(first_blocker(&game, sq(7, 0), -1, 0), None);
    }

    #[test]
    fn ray_includes_blocker_and_stops() {
        let mut game = GameState::new_empty();
        game.place_piece(sq(4, 0), Piece::new(Color::Black, PieceKind::Pawn));
        let ray = trace_ray(&game, sq(7, 0), -1, 0);
        assert_eq!(ray, vec![sq(6, 0), sq(5, 0), sq(4, 0)]);
        assert_eq!(first_blocker(&game, sq(7, 0), -1, 0), Some(sq(4, 0)));
    }
}
