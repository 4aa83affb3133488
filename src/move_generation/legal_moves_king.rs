use crate::game_state::{chess_rules::*, chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_if_reachable;
use crate::move_generation::move_generator::GeneratedMove;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<GeneratedMove>) {
    for to in king_attacks(from) {
        push_if_reachable(game_state, color, to, out);
    }

    generate_castling_moves(game_state, from, color, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, color: Color, out: &mut Vec<GeneratedMove>) {
    if king_from != king_home(color) {
        return;
    }

    let enemy = color.opposite();
    let mut king_safe: Option<bool> = None;

    for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
        if !can_castle_without_attack_checks(game_state, color, side) {
            continue;
        }

        // Cannot castle out of check.
        let safe = *king_safe.get_or_insert_with(|| !is_square_attacked(game_state, king_from, enemy));
        if !safe {
            return;
        }

        let row = color.home_row();
        let transit_clear = castling_transit_cols(side)
            .iter()
            .all(|&col| !is_square_attacked(game_state, Square::at(row, col), enemy));
        if transit_clear {
            out.push(GeneratedMove::quiet(castling_king_target(color, side)));
        }
    }
}

/// Right still held, own rook at home and the squares between are empty.
fn can_castle_without_attack_checks(game_state: &GameState, color: Color, side: CastlingSide) -> bool {
    if !game_state.castling_rights().has(color, side) {
        return false;
    }

    let rook_present = game_state
        .piece_at(rook_home(color, side))
        .is_some_and(|piece| piece == Piece::new(color, PieceKind::Rook));
    if !rook_present {
        return false;
    }

    let row = color.home_row();
    castling_empty_cols(side)
        .iter()
        .all(|&col| game_state.is_empty(Square::at(row, col)))
}
