use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::moves::sliding_rays::trace_rays;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Rook reach from `square`: empties plus the first blocker on each ray.
#[inline]
pub fn rook_attacks(game_state: &GameState, square: Square) -> Vec<Square> {
    trace_rays(game_state, square, &ROOK_DIRECTIONS)
}
