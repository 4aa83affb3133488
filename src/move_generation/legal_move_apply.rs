//! Move execution.
//!
//! Applies a `(from, to)` pair to the board in place: relocates the moving
//! piece, drops any captured piece, moves the rook along when the king
//! castles, updates castling rights and appends a `MoveRecord` to history.

use log::{debug, warn};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::{
    chess_rules::*,
    chess_types::*,
    game_state::GameState,
    undo_state::MoveRecord,
};

/// Execute `from -> to` and return the history record that was appended.
///
/// Callers are expected to pass a destination previously produced by move
/// generation. Input that would corrupt the board is rejected with
/// `ChessErrors::InvalidMove` and leaves the state untouched.
pub fn execute_move(game_state: &mut GameState, from: Square, to: Square) -> ChessResult<MoveRecord> {
    let piece = validate_move(game_state, from, to)?;
    let captured = game_state.piece_at(to);
    let is_castling = piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2;
    let prev_castling_rights = game_state.castling_rights;

    game_state.set(to, Some(piece));
    game_state.set(from, None);

    if is_castling {
        let side = castling_side_for_target_col(to.col());
        move_castling_rook(game_state, piece.color, from.row(), side);
    }

    update_castling_rights(game_state, piece, from, to, captured.is_some());

    let record = MoveRecord {
        from,
        to,
        piece,
        captured,
        is_castling,
        prev_castling_rights,
    };
    game_state.history.push(record);

    debug!(
        "executed {from}{}{to} ({:?}{})",
        if captured.is_some() { 'x' } else { '-' },
        piece.kind,
        if is_castling { ", castling" } else { "" }
    );

    Ok(record)
}

fn validate_move(game_state: &GameState, from: Square, to: Square) -> ChessResult<Piece> {
    let reject = |reason: &'static str| {
        warn!("rejected move {from}-{to}: {reason}");
        ChessErrors::InvalidMove { from, to, reason }
    };

    if from == to {
        return Err(reject("source and destination are the same square"));
    }

    let piece = game_state
        .piece_at(from)
        .ok_or_else(|| reject("no piece on the source square"))?;

    if game_state
        .piece_at(to)
        .is_some_and(|target| target.color == piece.color)
    {
        return Err(reject("destination holds a piece of the same color"));
    }

    Ok(piece)
}

/// Rook jumps from its corner to the square the king crossed.
fn move_castling_rook(game_state: &mut GameState, color: Color, row: u8, side: CastlingSide) {
    let rook_from = rook_home(color, side);
    let rook_to = castling_rook_target(color, side);
    let expected = Piece::new(color, PieceKind::Rook);

    if rook_from.row() != row || game_state.piece_at(rook_from) != Some(expected) {
        warn!("castling king from row {row} without a rook on {rook_from}; rook left in place");
        return;
    }

    game_state.set(rook_from, None);
    game_state.set(rook_to, Some(expected));
}

fn update_castling_rights(
    game_state: &mut GameState,
    moved: Piece,
    from: Square,
    to: Square,
    is_capture: bool,
) {
    if moved.kind == PieceKind::King {
        game_state.castling_rights.clear_color(moved.color);
    }

    for (color, side) in CASTLING_CORNERS {
        let corner = rook_home(color, side);
        // A rook leaving its corner, or a capture landing on one.
        let rook_left = moved.kind == PieceKind::Rook && from == corner;
        let captured_on_corner = is_capture && to == corner;
        if rook_left || captured_on_corner {
            game_state.castling_rights.clear(color, side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn quiet_move_relocates_piece_and_records_history() {
        let mut game = GameState::new_game();
        let record = execute_move(&mut game, sq(6, 4), sq(4, 4)).expect("e2-e4 should execute");

        assert_eq!(game.piece_at(sq(6, 4)), None);
        assert_eq!(game.piece_at(sq(4, 4)), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(record.captured, None);
        assert!(!record.is_castling);
        assert_eq!(game.history(), &[record]);
        assert_eq!(game.castling_rights(), CastlingRights::ALL);
    }

    #[test]
    fn bishop_captures_knight() {
        let mut game = GameState::new_empty();
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        let bishop = Piece::new(Color::White, PieceKind::Bishop);
        game.place_piece(sq(7, 0), bishop);
        game.place_piece(sq(5, 2), knight);

        let record = execute_move(&mut game, sq(7, 0), sq(5, 2)).expect("capture should execute");

        assert_eq!(record.captured, Some(knight));
        assert_eq!(game.piece_at(sq(5, 2)), Some(bishop));
        assert_eq!(game.pieces().count(), 1);
    }

    #[test]
    fn kingside_castling_moves_rook_to_f1() {
        let mut game = GameState::from_position("r3k2r/8/8/8/8/8/8/R3K2R KQkq").expect("position should parse");
        let record = execute_move(&mut game, sq(7, 4), sq(7, 6)).expect("castling should execute");

        assert!(record.is_castling);
        assert_eq!(record.castling_side(), Some(CastlingSide::Kingside));
        assert_eq!(game.piece_at(sq(7, 6)), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(game.piece_at(sq(7, 5)), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(game.piece_at(sq(7, 7)), None);
        assert!(!game.castling_rights().white_kingside);
        assert!(!game.castling_rights().white_queenside);
        assert!(game.castling_rights().black_kingside);
    }

    #[test]
    fn queenside_castling_moves_rook_to_d8() {
        let mut game = GameState::from_position("r3k2r/8/8/8/8/8/8/R3K2R KQkq").expect("position should parse");
        execute_move(&mut game, sq(0, 4), sq(0, 2)).expect("castling should execute");

        assert_eq!(game.piece_at(sq(0, 2)), Some(Piece::new(Color::Black, PieceKind::King)));
        assert_eq!(game.piece_at(sq(0, 3)), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(game.piece_at(sq(0, 0)), None);
        assert!(!game.castling_rights().black_kingside);
        assert!(!game.castling_rights().black_queenside);
    }

    #[test]
    fn rook_leaving_corner_clears_single_right() {
        let mut game = GameState::from_position("r3k2r/8/8/8/8/8/8/R3K2R KQkq").expect("position should parse");
        execute_move(&mut game, sq(7, 0), sq(6, 0)).expect("rook move should execute");

        let rights = game.castling_rights();
        assert!(!rights.white_queenside);
        assert!(rights.white_kingside && rights.black_kingside && rights.black_queenside);
    }

    #[test]
    fn capture_on_corner_clears_the_victims_right() {
        let mut game = GameState::from_position("r3k2r/8/8/8/8/8/8/R3K2R KQkq").expect("position should parse");
        execute_move(&mut game, sq(7, 7), sq(0, 7)).expect("rook capture should execute");

        let rights = game.castling_rights();
        assert!(!rights.white_kingside);
        assert!(!rights.black_kingside);
        assert!(rights.white_queenside && rights.black_queenside);
    }

    #[test]
    fn quiet_move_onto_empty_corner_keeps_the_right() {
        // Right granted by the position string although h1 is empty.
        let mut game = GameState::from_position("4k3/8/8/8/8/8/7R/4K3 K").expect("position should parse");
        execute_move(&mut game, sq(6, 7), sq(7, 7)).expect("rook move should execute");

        assert!(game.castling_rights().white_kingside);
    }

    #[test]
    fn invalid_moves_leave_the_board_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();

        let empty_source = execute_move(&mut game, sq(4, 4), sq(3, 4));
        assert!(matches!(empty_source, Err(ChessErrors::InvalidMove { .. })));

        let same_square = execute_move(&mut game, sq(6, 4), sq(6, 4));
        assert!(matches!(same_square, Err(ChessErrors::InvalidMove { .. })));

        let own_capture = execute_move(&mut game, sq(7, 0), sq(6, 0));
        assert!(matches!(own_capture, Err(ChessErrors::InvalidMove { .. })));

        assert_eq!(game, before);
    }
}
