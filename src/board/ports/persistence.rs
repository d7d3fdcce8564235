//! Persistence port for board state.

use crate::board::domain::BoardSnapshot;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Asynchronous key-value store holding the serialized board.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardPersistence: Send + Sync {
    /// Reads the stored board state.
    ///
    /// Returns `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Corrupt`] when stored data cannot be
    /// decoded, or [`PersistenceError::Backend`] when the store fails.
    async fn load(&self) -> PersistenceResult<Option<BoardSnapshot>>;

    /// Replaces the stored board state.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the state cannot be encoded or the
    /// store does not acknowledge the write.
    async fn save(&self, snapshot: &BoardSnapshot) -> PersistenceResult<()>;
}

/// Errors returned by persistence implementations.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The board state could not be encoded.
    #[error("failed to encode board state: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// Stored data could not be decoded or failed its integrity check.
    #[error("stored board state is corrupt: {0}")]
    Corrupt(String),

    /// Storage-layer failure.
    #[error("persistence backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersistenceError {
    /// Wraps a storage-layer error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
