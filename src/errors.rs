//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board setup, square
//! parsing, move execution and the session front end. Callers match on it
//! to present messages or to reject input without touching the board.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Unified error type for the rules engine.
///
/// Input-related variants (`InvalidSquare`, `InvalidAlgebraicString`,
/// `InvalidPositionString`) are recoverable and suitable for showing to end
/// users. `InvalidMove` is the defensive contract of the executor: the board
/// is left unchanged whenever it is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Row or column outside `0..8`.
    ///
    /// Payload: (row, col) as given.
    #[error("square ({0}, {1}) is off the board")]
    InvalidSquare(i32, i32),

    /// A coordinate string such as `e4` could not be parsed.
    #[error("invalid algebraic square: '{0}'")]
    InvalidAlgebraicString(String),

    /// The executor refused a move that would corrupt the board.
    #[error("invalid move {from}-{to}: {reason}")]
    InvalidMove {
        from: Square,
        to: Square,
        reason: &'static str,
    },

    /// A placement/castling position string was malformed.
    #[error("invalid position string: {0}")]
    InvalidPositionString(String),

    /// The session only executes destinations offered for the selected piece.
    #[error("{to} is not a destination of {from}")]
    MoveNotSelected { from: Square, to: Square },

    /// A destination was confirmed before any square was selected.
    #[error("no square selected for destination {to}")]
    NothingSelected { to: Square },

    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("unknown option: '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOptionValue { name: String, value: String },
}

pub type ChessResult<T> = Result<T, ChessErrors>;
