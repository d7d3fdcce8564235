//! Persistence synchronization between the board and its store.

use crate::board::{
    domain::{BoardSnapshot, TaskBoard},
    ports::{BoardPersistence, PersistenceResult},
};
use tracing::{debug, info, warn};

/// Writes the full collection and the four container lists to the store.
///
/// # Errors
///
/// Returns the store's [`PersistenceError`](crate::board::ports::PersistenceError)
/// when the write is not acknowledged. The board itself is never touched.
pub async fn save_all<P>(persistence: &P, board: &TaskBoard) -> PersistenceResult<()>
where
    P: BoardPersistence + ?Sized,
{
    let snapshot = BoardSnapshot::capture(board);
    persistence.save(&snapshot).await?;
    debug!(tasks = board.len(), "board state flushed");
    Ok(())
}

/// Rebuilds the board from the store.
///
/// Absent or unreadable state yields an empty board; loading never fails.
pub async fn load_all<P>(persistence: &P) -> TaskBoard
where
    P: BoardPersistence + ?Sized,
{
    let snapshot = match persistence.load().await {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            info!("no stored board state, starting empty");
            return TaskBoard::new();
        }
        Err(err) => {
            warn!(error = %err, "stored board state unusable, starting empty");
            return TaskBoard::new();
        }
    };

    let restored = TaskBoard::restore(snapshot);
    if !restored.duplicates.is_empty() {
        warn!(
            duplicates = ?restored.duplicates,
            "dropped tasks with duplicate identifiers"
        );
    }
    info!(tasks = restored.board.len(), "board state loaded");
    restored.board
}
