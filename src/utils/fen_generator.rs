use crate::game_state::{chess_types::*, game_state::GameState};

/// Placement plus castling field, the inverse of `parse_position`.
pub fn generate_position(game_state: &GameState) -> String {
    format!(
        "{} {}",
        generate_board_field(game_state),
        generate_castling_field(game_state.castling_rights())
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for (row, rank) in game_state.board.iter().enumerate() {
        let mut empty_count = 0u8;

        for square in rank {
            if let Some(piece) = square {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    if rights.white_kingside {
        out.push('K');
    }
    if rights.white_queenside {
        out.push('Q');
    }
    if rights.black_kingside {
        out.push('k');
    }
    if rights.black_queenside {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}
