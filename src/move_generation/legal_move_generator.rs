//! Per-piece move generation entry points.
//!
//! `generate_moves` dispatches on the piece kind and returns pseudo-legal
//! destinations: occupancy and movement rules only, plus the castling gates.
//! `LegalMoveGenerator` layers a self-check filter on top by simulating each
//! candidate on a scratch copy of the state.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::execute_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_undo::{undo_move_with_policy, UndoPolicy};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

/// Destinations for the piece on `from`; empty when the square is empty.
pub fn generate_moves(game_state: &GameState, from: Square) -> Vec<GeneratedMove> {
    let Some(piece) = game_state.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::<GeneratedMove>::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece.color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece.color, &mut out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece.color, &mut out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece.color, &mut out),
        PieceKind::King => generate_king_moves(game_state, from, piece.color, &mut out),
    }
    out
}

/// Destination squares only, for highlighting a selected piece.
pub fn selection(game_state: &GameState, from: Square) -> Vec<Square> {
    generate_moves(game_state, from)
        .into_iter()
        .map(|mv| mv.to)
        .collect()
}

/// Every generated move of one color as `(from, move)` pairs.
pub fn generate_all_moves(
    generator: &dyn MoveGenerator,
    game_state: &GameState,
    color: Color,
) -> Vec<(Square, GeneratedMove)> {
    game_state
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .flat_map(|(from, _)| {
            generator
                .generate_moves(game_state, from)
                .into_iter()
                .map(move |mv| (from, mv))
        })
        .collect()
}

/// Movement rules only; the mover's own king may be left attacked.
pub struct PseudoLegalMoveGenerator;

/// Pseudo-legal moves minus those that leave the mover's king attacked.
pub struct LegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState, from: Square) -> Vec<GeneratedMove> {
        generate_moves(game_state, from)
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState, from: Square) -> Vec<GeneratedMove> {
        let Some(piece) = game_state.piece_at(from) else {
            return Vec::new();
        };

        let mut scratch = game_state.clone();
        generate_moves(game_state, from)
            .into_iter()
            .filter(|mv| {
                if execute_move(&mut scratch, from, mv.to).is_err() {
                    return false;
                }
                let leaves_check = is_king_in_check(&scratch, piece.color);
                undo_move_with_policy(&mut scratch, UndoPolicy::RestoreCastlingRights);
                !leaves_check
            })
            .collect()
    }
}
