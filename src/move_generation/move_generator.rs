use crate::game_state::{chess_types::Square, game_state::GameState};

/// One candidate destination for the piece on the queried square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratedMove {
    pub to: Square,
    pub is_capture: bool,
}

impl GeneratedMove {
    #[inline]
    pub const fn quiet(to: Square) -> Self {
        Self {
            to,
            is_capture: false,
        }
    }

    #[inline]
    pub const fn capture(to: Square) -> Self {
        Self {
            to,
            is_capture: true,
        }
    }
}

/// Destination enumeration for a single piece.
///
/// Implementations never mutate the observable game state and return an empty
/// list when `from` holds no piece.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, game_state: &GameState, from: Square) -> Vec<GeneratedMove>;
}
