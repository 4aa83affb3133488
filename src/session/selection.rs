use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

/// The square a user picked and the destinations offered for it.
///
/// Owned by the session, not the engine; cleared after every move, undo,
/// or reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    square: Option<Square>,
    destinations: Vec<GeneratedMove>,
}

impl Selection {
    pub fn select(&mut self, generator: &dyn MoveGenerator, game_state: &GameState, square: Square) -> &[GeneratedMove] {
        self.square = Some(square);
        self.destinations = generator.generate_moves(game_state, square);
        &self.destinations
    }

    pub fn clear(&mut self) {
        self.square = None;
        self.destinations.clear();
    }

    pub fn square(&self) -> Option<Square> {
        self.square
    }

    pub fn destinations(&self) -> &[GeneratedMove] {
        &self.destinations
    }

    /// Whether `from -> to` was offered by the current selection.
    pub fn offers(&self, from: Square, to: Square) -> bool {
        self.square == Some(from) && self.destinations.iter().any(|mv| mv.to == to)
    }
}
