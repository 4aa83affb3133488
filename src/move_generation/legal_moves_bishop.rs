use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_if_reachable;
use crate::move_generation::move_generator::GeneratedMove;
use crate::moves::bishop_moves::bishop_attacks;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<GeneratedMove>) {
    for to in bishop_attacks(game_state, from) {
        push_if_reachable(game_state, color, to, out);
    }
}
