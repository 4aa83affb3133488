//! Session handle that can be shared across threads.
//!
//! Every operation takes the lock for its whole duration, so an execute or
//! undo is never observed half-applied. A poisoned lock is recovered: the
//! session's own operations leave the state consistent before they can
//! panic, so the inner value is still usable.

use std::sync::{Arc, Mutex, MutexGuard};

use log::warn;

use crate::config::SessionConfig;
use crate::errors::ChessResult;
use crate::game_state::{chess_types::Square, game_state::GameState, undo_state::MoveRecord};
use crate::session::session_top::ChessSession;

#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<ChessSession>>,
}

impl SharedSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ChessSession::new(config))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ChessSession> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("session lock poisoned; continuing with inner state");
            poisoned.into_inner()
        })
    }

    pub fn play(&self, from: Square, to: Square) -> ChessResult<MoveRecord> {
        self.lock().play(from, to)
    }

    pub fn undo(&self) -> Option<MoveRecord> {
        self.lock().undo()
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Copy of the current state taken under the lock.
    pub fn snapshot(&self) -> GameState {
        self.lock().game_state().clone()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with_session<T>(&self, f: impl FnOnce(&mut ChessSession) -> T) -> T {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;
    use std::thread;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn concurrent_execute_and_undo_keep_the_board_consistent() {
        let shared = SharedSession::default();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        if shared.play(sq("g1"), sq("f3")).is_ok() {
                            shared.undo();
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker should not panic");
        }

        let state = shared.snapshot();
        let knights_on_g1_or_f3 = [sq("g1"), sq("f3")]
            .iter()
            .filter(|square| state.piece_at(**square).is_some())
            .count();
        assert_eq!(knights_on_g1_or_f3, 1);
        assert_eq!(state.pieces().count(), 32);
        assert_eq!(state.history().len(), usize::from(state.is_empty(sq("g1"))));
    }

    #[test]
    fn reset_through_the_handle() {
        let shared = SharedSession::new(SessionConfig::default());
        shared.play(sq("e2"), sq("e4")).expect("e2-e4");
        shared.reset();
        assert_eq!(shared.snapshot(), GameState::new_game());
        assert_eq!(shared.with_session(|session| session.selection().square()), None);
    }
}
