use crate::game_state::chess_types::*;

/// Single history entry written by `execute_move` and consumed by `undo_move`.
///
/// Holds the pre-move values needed to put the board back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub is_castling: bool,

    /// Rights before the move; only read by the restoring undo policy.
    pub prev_castling_rights: CastlingRights,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Wing of a castling move, `None` for every other move.
    pub fn castling_side(&self) -> Option<CastlingSide> {
        if !self.is_castling {
            return None;
        }
        Some(if self.to.col() > self.from.col() {
            CastlingSide::Kingside
        } else {
            CastlingSide::Queenside
        })
    }
}
