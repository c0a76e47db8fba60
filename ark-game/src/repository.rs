//! Single source of truth for game progress.
//!
//! Every screen holds a clone of the same [`GameRepository`]; all clones see
//! and mutate one in-memory [`GameState`]. Every mutation is written through
//! to the backing [`GameStorage`] immediately.

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::GameState;
use crate::storage::GameStorage;

struct Inner<S> {
    storage: S,
    state: GameState,
}

pub struct GameRepository<S: GameStorage> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: GameStorage> Clone for GameRepository<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: GameStorage> GameRepository<S> {
    /// Load the stored record, or create and persist defaults when there is
    /// none. Unreadable or malformed records are treated as missing.
    pub fn load(storage: S) -> Self {
        let state = match storage.load_state() {
            Ok(Some(state)) => {
                log::debug!("loaded saved progress");
                Some(state)
            }
            Ok(None) => None,
            Err(err) => {
                log::warn!("discarding unreadable saved progress: {err}");
                None
            }
        };

        let repository = Self {
            inner: Rc::new(RefCell::new(Inner {
                storage,
                state: state.clone().unwrap_or_default(),
            })),
        };
        if state.is_none() {
            repository.save();
        }
        repository
    }

    /// Snapshot of the current record.
    #[must_use]
    pub fn get(&self) -> GameState {
        self.inner.borrow().state.clone()
    }

    /// Borrow the current record without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.inner.borrow().state)
    }

    /// Replace the whole record and persist it.
    pub fn set(&self, state: GameState) {
        self.inner.borrow_mut().state = state;
        self.save();
    }

    /// Read-modify-write on the latest record, then persist.
    pub fn update<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        let result = f(&mut self.inner.borrow_mut().state);
        self.save();
        result
    }

    /// Start over. Every field returns to its default except
    /// `first_playthrough`, which is forced false.
    pub fn reset(&self) {
        log::info!("resetting game progress");
        self.set(GameState::replay());
    }

    /// Persist the current record. Failures are logged; the in-memory
    /// record stays authoritative for the rest of the session.
    pub fn save(&self) {
        let inner = self.inner.borrow();
        if let Err(err) = inner.storage.save_state(&inner.state) {
            log::warn!("progress may not be saved: {err}");
        }
    }
}
