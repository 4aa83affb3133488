//! Undo of the most recent executed move.
//!
//! The default policy puts pieces back but keeps castling rights as they
//! are after the move, so a right lost by the undone move stays lost.
//! `UndoPolicy::RestoreCastlingRights` rewinds the rights as well.

use log::debug;

use crate::game_state::{
    chess_rules::*,
    chess_types::*,
    game_state::GameState,
    undo_state::MoveRecord,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UndoPolicy {
    #[default]
    KeepCastlingRights,
    RestoreCastlingRights,
}

/// Pop and reverse the last move. `None` when there is nothing to undo.
#[inline]
pub fn undo_move(game_state: &mut GameState) -> Option<MoveRecord> {
    undo_move_with_policy(game_state, UndoPolicy::KeepCastlingRights)
}

pub fn undo_move_with_policy(game_state: &mut GameState, policy: UndoPolicy) -> Option<MoveRecord> {
    let record = game_state.history.pop()?;

    game_state.set(record.from, Some(record.piece));
    game_state.set(record.to, record.captured);

    if let Some(side) = record.castling_side() {
        let color = record.piece.color;
        let rook_from = rook_home(color, side);
        let rook_to = castling_rook_target(color, side);
        let rook = Piece::new(color, PieceKind::Rook);
        if game_state.piece_at(rook_to) == Some(rook) && game_state.is_empty(rook_from) {
            game_state.set(rook_to, None);
            game_state.set(rook_from, Some(rook));
        }
    }

    if policy == UndoPolicy::RestoreCastlingRights {
        game_state.castling_rights = record.prev_castling_rights;
    }

    debug!("undid {}-{} ({:?})", record.from, record.to, policy);
    Some(record)
}
