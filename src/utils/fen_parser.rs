//! Position-string parser.
//!
//! Builds a `GameState` from a FEN-style placement field (rank 8 first)
//! optionally followed by a castling field (`KQkq` subset or `-`). When the
//! castling field is omitted all four rights are granted. History is empty.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_position(position: &str) -> ChessResult<GameState> {
    let mut parts = position.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| invalid("missing board layout"))?;
    let castling_part = parts.next();

    if parts.next().is_some() {
        return Err(invalid("position has extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;
    game_state.castling_rights = match castling_part {
        Some(field) => parse_castling_rights(field)?,
        None => CastlingRights::ALL,
    };

    Ok(game_state)
}

fn invalid(message: impl Into<String>) -> ChessErrors {
    ChessErrors::InvalidPositionString(message.into())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}' in board layout")))?;

            if col >= 8 {
                return Err(invalid(format!("rank {} has too many files", 8 - row)));
            }

            game_state.board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(())
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}
