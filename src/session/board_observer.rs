//! Change notifications for rendering collaborators.
//!
//! The engine never draws anything. After every execute, undo and reset the
//! session hands observers a read-only view of the state plus what changed,
//! and each observer refreshes its own projection.

use std::sync::{Arc, Mutex};

use log::warn;

use crate::game_state::{game_state::GameState, undo_state::MoveRecord};
use crate::utils::move_notation::move_notation;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardChange {
    Executed(MoveRecord),
    Undone(MoveRecord),
    Reset,
    /// Board replaced from a position string.
    Loaded,
}

pub trait BoardObserver: Send {
    fn on_change(&mut self, game_state: &GameState, change: &BoardChange);
}

/// Lets a caller keep a handle on an observer the session owns.
impl<T: BoardObserver> BoardObserver for Arc<Mutex<T>> {
    fn on_change(&mut self, game_state: &GameState, change: &BoardChange) {
        match self.lock() {
            Ok(mut observer) => observer.on_change(game_state, change),
            Err(_) => warn!("observer lock poisoned; notification dropped"),
        }
    }
}

/// Keeps the last rendered board text.
#[derive(Debug, Default)]
pub struct BoardView {
    rendered: String,
    refreshes: usize,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes
    }
}

impl BoardObserver for BoardView {
    fn on_change(&mut self, game_state: &GameState, _change: &BoardChange) {
        self.rendered = render_game_state(game_state);
        self.refreshes += 1;
    }
}

/// Mirrors history as a list of notation entries, appending and popping
/// instead of rebuilding.
#[derive(Debug, Default)]
pub struct MoveListView {
    entries: Vec<String>,
}

impl MoveListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl BoardObserver for MoveListView {
    fn on_change(&mut self, game_state: &GameState, change: &BoardChange) {
        match change {
            BoardChange::Executed(record) => self.entries.push(move_notation(record)),
            BoardChange::Undone(_) => {
                self.entries.pop();
            }
            BoardChange::Reset | BoardChange::Loaded => {
                self.entries = game_state.history().iter().map(move_notation).collect();
            }
        }
    }
}
