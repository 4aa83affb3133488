//! Canonical chess-rule constants.
//!
//! Starting layout and the fixed geometry of castling: where kings and rooks
//! start, where they land, and which squares must be empty or safe.

use crate::game_state::chess_types::{CastlingSide, Color, Square};

/// Standard starting placement, row 0 (rank 8) first.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const KING_HOME_COL: u8 = 4;

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::at(color.home_row(), KING_HOME_COL)
}

/// Original rook square for a color and wing.
#[inline]
pub const fn rook_home(color: Color, side: CastlingSide) -> Square {
    let col = match side {
        CastlingSide::Kingside => 7,
        CastlingSide::Queenside => 0,
    };
    Square::at(color.home_row(), col)
}

/// King destination when castling.
#[inline]
pub const fn castling_king_target(color: Color, side: CastlingSide) -> Square {
    let col = match side {
        CastlingSide::Kingside => 6,
        CastlingSide::Queenside => 2,
    };
    Square::at(color.home_row(), col)
}

/// Rook destination when castling: the square the king passed over.
#[inline]
pub const fn castling_rook_target(color: Color, side: CastlingSide) -> Square {
    let col = match side {
        CastlingSide::Kingside => 5,
        CastlingSide::Queenside => 3,
    };
    Square::at(color.home_row(), col)
}

/// Columns strictly between king and rook; all must be empty.
#[inline]
pub const fn castling_empty_cols(side: CastlingSide) -> &'static [u8] {
    match side {
        CastlingSide::Kingside => &[5, 6],
        CastlingSide::Queenside => &[1, 2, 3],
    }
}

/// Columns the king crosses, destination included; none may be attacked.
#[inline]
pub const fn castling_transit_cols(side: CastlingSide) -> &'static [u8] {
    match side {
        CastlingSide::Kingside => &[5, 6],
        CastlingSide::Queenside => &[3, 2],
    }
}

/// Wing implied by a king landing column during castling.
#[inline]
pub const fn castling_side_for_target_col(col: u8) -> CastlingSide {
    if col > KING_HOME_COL {
        CastlingSide::Kingside
    } else {
        CastlingSide::Queenside
    }
}

/// Corner squares whose occupancy gates a castling right.
pub const CASTLING_CORNERS: [(Color, CastlingSide); 4] = [
    (Color::White, CastlingSide::Kingside),
    (Color::White, CastlingSide::Queenside),
    (Color::Black, CastlingSide::Kingside),
    (Color::Black, CastlingSide::Queenside),
];
