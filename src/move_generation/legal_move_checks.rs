//! Square attack detection.
//!
//! A square is attacked by a color when some piece of that color could
//! capture onto it next move. Turn order and pins are ignored.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attack_origins;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::sliding_rays::first_blocker;

#[inline]
fn holds(game_state: &GameState, square: Square, color: Color, kinds: &[PieceKind]) -> bool {
    game_state
        .piece_at(square)
        .is_some_and(|piece| piece.color == color && kinds.contains(&piece.kind))
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    if pawn_attack_origins(attacker_color, square)
        .any(|from| holds(game_state, from, attacker_color, &[PieceKind::Pawn]))
    {
        return true;
    }

    if knight_attacks(square).any(|from| holds(game_state, from, attacker_color, &[PieceKind::Knight])) {
        return true;
    }

    let diagonal_hit = BISHOP_DIRECTIONS.iter().any(|&(d_row, d_col)| {
        first_blocker(game_state, square, d_row, d_col).is_some_and(|from| {
            holds(game_state, from, attacker_color, &[PieceKind::Bishop, PieceKind::Queen])
        })
    });
    if diagonal_hit {
        return true;
    }

    let orthogonal_hit = ROOK_DIRECTIONS.iter().any(|&(d_row, d_col)| {
        first_blocker(game_state, square, d_row, d_col).is_some_and(|from| {
            holds(game_state, from, attacker_color, &[PieceKind::Rook, PieceKind::Queen])
        })
    });
    if orthogonal_hit {
        return true;
    }

    king_attacks(square).any(|from| holds(game_state, from, attacker_color, &[PieceKind::King]))
}

/// Whether `color`'s king stands on an attacked square. Missing king: `false`.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}
