//! Random playouts over the move generator.
//!
//! Alternates white and black starting with white, picking uniformly among
//! all generated moves of the side to play. Used to drive execute/undo
//! through many positions in tests and benchmarks.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::errors::ChessResult;
use crate::game_state::{chess_types::Color, game_state::GameState, undo_state::MoveRecord};
use crate::move_generation::legal_move_apply::execute_move;
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::move_generation::move_generator::MoveGenerator;

/// Play up to `plies` random moves. Stops early when a side has no move or
/// its king has been captured.
pub fn play_random_moves<R: Rng + ?Sized>(
    game_state: &mut GameState,
    generator: &dyn MoveGenerator,
    plies: usize,
    rng: &mut R,
) -> ChessResult<Vec<MoveRecord>> {
    let mut played = Vec::with_capacity(plies);
    let mut side = Color::White;

    for _ in 0..plies {
        if game_state.king_square(side).is_none() {
            break;
        }
        let candidates = generate_all_moves(generator, game_state, side);
        let Some((from, mv)) = candidates.choose(rng) else {
            break;
        };
        played.push(execute_move(game_state, *from, mv.to)?);
        side = side.opposite();
    }

    Ok(played)
}
