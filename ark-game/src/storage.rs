use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::state::GameState;

/// Storage key holding the serialized [`GameState`].
pub const STATE_KEY: &str = "arkGameState";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable home of the progress record.
/// Platform-specific implementations should provide this
pub trait GameStorage {
    type Error: std::error::Error + 'static;

    /// Read the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the stored record
    /// cannot be decoded.
    fn load_state(&self) -> Result<Option<GameState>, Self::Error>;

    /// Persist the full record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    fn save_state(&self, state: &GameState) -> Result<(), Self::Error>;

    /// Remove the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn clear_state(&self) -> Result<(), Self::Error>;
}

/// In-process key/value store holding JSON text, so a save followed by a
/// load goes through the same codec as a browser reload.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Overwrite `key` with arbitrary text.
    pub fn insert_raw(&self, key: &str, value: impl Into<String>) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl GameStorage for MemoryStorage {
    type Error = StorageError;

    fn load_state(&self) -> Result<Option<GameState>, Self::Error> {
        match self.entries.borrow().get(STATE_KEY) {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn save_state(&self, state: &GameState) -> Result<(), Self::Error> {
        let text = serde_json::to_string(state)?;
        self.insert_raw(STATE_KEY, text);
        Ok(())
    }

    fn clear_state(&self) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(STATE_KEY);
        Ok(())
    }
}

/// Storage that rejects every operation. Useful for exercising the
/// fall-back-to-defaults paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl GameStorage for UnavailableStorage {
    type Error = StorageError;

    fn load_state(&self) -> Result<Option<GameState>, Self::Error> {
        Err(StorageError::Backend("storage unavailable".to_string()))
    }

    fn save_state(&self, _state: &GameState) -> Result<(), Self::Error> {
        Err(StorageError::Backend("storage unavailable".to_string()))
    }

    fn clear_state(&self) -> Result<(), Self::Error> {
        Err(StorageError::Backend("storage unavailable".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_through_json() {
        let storage = MemoryStorage::new();
        assert!(storage.load_state().unwrap().is_none());

        let mut state = GameState::default();
        state.nuvola.user_answer = "mist speaks".to_string();
        storage.save_state(&state).unwrap();

        let raw = storage.raw(STATE_KEY).expect("record written");
        assert!(raw.contains("\"nuvolaUserAnswer\":\"mist speaks\""));
        assert_eq!(storage.load_state().unwrap(), Some(state));
    }

    #[test]
    fn clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.save_state(&GameState::default()).unwrap();
        assert!(other.load_state().unwrap().is_some());
        other.clear_state().unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn malformed_record_is_a_serialization_error() {
        let storage = MemoryStorage::new();
        storage.insert_raw(STATE_KEY, "{not json");
        assert!(matches!(
            storage.load_state(),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn unavailable_storage_fails_every_call() {
        let storage = UnavailableStorage;
        assert!(storage.load_state().is_err());
        assert!(storage.save_state(&GameState::default()).is_err());
        assert!(storage.clear_state().is_err());
    }
}
