use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::move_generation::move_generator::GeneratedMove;
use crate::moves::pawn_moves::pawn_attacks;

/// Pushes and diagonal captures. No en-passant and no promotion.
pub fn generate_pawn_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<GeneratedMove>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if game_state.is_empty(one_step) {
            out.push(GeneratedMove::quiet(one_step));

            if from.row() == color.pawn_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if game_state.is_empty(two_step) {
                        out.push(GeneratedMove::quiet(two_step));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(color, from) {
        if enemy_piece_on(game_state, color, to).is_some() {
            out.push(GeneratedMove::capture(to));
        }
    }
}
