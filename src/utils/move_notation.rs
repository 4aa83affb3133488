//! Move-log notation.
//!
//! Coordinate notation built from a history record: `e2-e4` for quiet
//! moves, `e4xd5` for captures, and castling moves carry ` O-O` or ` O-O-O`.

use crate::game_state::{chess_types::CastlingSide, undo_state::MoveRecord};
use crate::utils::algebraic::square_to_algebraic;

pub fn move_notation(record: &MoveRecord) -> String {
    let separator = if record.is_capture() { 'x' } else { '-' };
    let mut out = format!(
        "{}{}{}",
        square_to_algebraic(record.from),
        separator,
        square_to_algebraic(record.to)
    );

    match record.castling_side() {
        Some(CastlingSide::Kingside) => out.push_str(" O-O"),
        Some(CastlingSide::Queenside) => out.push_str(" O-O-O"),
        None => {}
    }

    out
}
