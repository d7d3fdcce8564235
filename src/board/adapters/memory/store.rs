//! In-memory key-value store for the serialized board.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::BoardSnapshot,
    ports::{BoardPersistence, PersistenceError, PersistenceResult},
};

/// Thread-safe in-memory board store.
///
/// The board is held as a JSON string, so loading goes through the same
/// decoding path as any external store and corrupt payloads can be seeded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    payload: Option<String>,
    save_count: usize,
    reject_saves: bool,
}

impl InMemoryBoardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding the given raw payload.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            state.payload = Some(payload.into());
        }
        store
    }

    /// Returns the stored raw payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.state.read().ok().and_then(|state| state.payload.clone())
    }

    /// Returns the number of acknowledged saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.state.read().map_or(0, |state| state.save_count)
    }

    /// Makes subsequent saves fail until switched back.
    pub fn reject_saves(&self, reject: bool) {
        if let Ok(mut state) = self.state.write() {
            state.reject_saves = reject;
        }
    }
}

fn lock_error(err: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::backend(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardPersistence for InMemoryBoardStore {
    async fn load(&self) -> PersistenceResult<Option<BoardSnapshot>> {
        let state = self.state.read().map_err(lock_error)?;
        state
            .payload
            .as_deref()
            .map(|payload| {
                serde_json::from_str(payload)
                    .map_err(|err| PersistenceError::Corrupt(err.to_string()))
            })
            .transpose()
    }

    async fn save(&self, snapshot: &BoardSnapshot) -> PersistenceResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.reject_saves {
            return Err(PersistenceError::backend(std::io::Error::other(
                "store rejected the write",
            )));
        }
        state.payload = Some(serde_json::to_string(snapshot)?);
        state.save_count += 1;
        Ok(())
    }
}
