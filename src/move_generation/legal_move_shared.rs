use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::GeneratedMove;

/// Push `to` for a piece of `mover` if it is empty or holds an enemy.
///
/// Returns `false` when the square is occupied, whatever its color.
#[inline]
pub fn push_if_reachable(
    game_state: &GameState,
    mover: Color,
    to: Square,
    out: &mut Vec<GeneratedMove>,
) -> bool {
    match game_state.piece_at(to) {
        None => {
            out.push(GeneratedMove::quiet(to));
            true
        }
        Some(piece) => {
            if piece.color != mover {
                out.push(GeneratedMove::capture(to));
            }
            false
        }
    }
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, mover: Color, square: Square) -> Option<Piece> {
    game_state
        .piece_at(square)
        .filter(|piece| piece.color != mover)
}
