//! Browser persistence for the progress record.

use ark_game::{GameState, GameStorage, STATE_KEY};
use gloo::storage::errors::StorageError as GlooStorageError;
use gloo::storage::{LocalStorage, Storage};

/// Game storage backed by `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebGameStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<GlooStorageError> for WebStorageError {
    fn from(err: GlooStorageError) -> Self {
        match err {
            GlooStorageError::SerdeError(err) => Self::Serialization(err),
            other => Self::Storage(other.to_string()),
        }
    }
}

impl GameStorage for WebGameStorage {
    type Error = WebStorageError;

    fn load_state(&self) -> Result<Option<GameState>, Self::Error> {
        match LocalStorage::get::<GameState>(STATE_KEY) {
            Ok(state) => Ok(Some(state)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save_state(&self, state: &GameState) -> Result<(), Self::Error> {
        LocalStorage::set(STATE_KEY, state).map_err(WebStorageError::from)
    }

    fn clear_state(&self) -> Result<(), Self::Error> {
        LocalStorage::delete(STATE_KEY);
        Ok(())
    }
}
