//! Rendering port notified after every successful board mutation.

use crate::board::domain::TaskBoard;

/// Consumer that re-derives its visual state from the board.
///
/// Implementations hold no board state of their own; every refresh is a
/// pure projection of the board passed in.
pub trait BoardRenderer: Send + Sync {
    /// Redraws from the current board state.
    fn refresh(&self, board: &TaskBoard);
}
