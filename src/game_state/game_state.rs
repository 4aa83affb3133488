//! Owned board state for one game.
//!
//! `GameState` is the central model of the engine. It holds the 8x8 mailbox,
//! the castling flags and the move history used by execute/undo. Every
//! engine operation receives it explicitly, so independent games never share
//! state.

use crate::game_state::{chess_types::*, undo_state::MoveRecord};
use crate::utils::fen_generator::generate_position;
use crate::utils::fen_parser::parse_position;
use crate::errors::ChessResult;

/// Back rank from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [row][col], row 0 = rank 8.
    pub(crate) board: [[Option<Piece>; 8]; 8],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            castling_rights: CastlingRights::NONE,
            history: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, no castling rights, no history.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        let mut game_state = Self::default();
        game_state.reset();
        game_state
    }

    #[inline]
    pub fn from_position(position: &str) -> ChessResult<Self> {
        parse_position(position)
    }

    #[inline]
    pub fn get_position(&self) -> String {
        generate_position(self)
    }

    /// Standard starting arrangement, all rights restored, history cleared.
    pub fn reset(&mut self) {
        self.board = [[None; 8]; 8];
        for color in [Color::White, Color::Black] {
            let home = color.home_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                self.board[home][col] = Some(Piece::new(color, *kind));
                self.board[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        self.castling_rights = CastlingRights::ALL;
        self.history.clear();
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put `piece` on `square`, replacing whatever was there.
    #[inline]
    pub fn place_piece(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    /// Remove and return the piece on `square`.
    #[inline]
    pub fn clear_square(&mut self, square: Square) -> Option<Piece> {
        let previous = self.piece_at(square);
        self.set(square, None);
        previous
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    /// Executed moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Every occupied square with its piece, row-major from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

/// Color test by piece tag.
#[inline]
pub fn is_white(piece: Piece) -> bool {
    piece.is_white()
}
