//! Domain model for the task board.
//!
//! The board domain covers the task collection, its partition into the four
//! containers, transfers between containers and subtask progress. Storage
//! and rendering stay outside the domain boundary.

mod board;
mod container;
mod error;
mod ids;
mod progress;
mod snapshot;
mod task;
mod transfer;

pub use board::TaskBoard;
pub use container::{ContainerKey, ContainerList, ContainerLists, ContainerTarget, key_for_list};
pub use error::{BoardDomainError, ParseContainerKeyError, ParsePriorityError};
pub use ids::{SubtaskId, TaskId};
pub use progress::{SubtaskProgress, SubtaskState, subtask_states};
pub use snapshot::{BoardSnapshot, RestoredBoard};
pub use task::{Assignee, Priority, Subtask, Task, TaskDraft};
pub use transfer::TransferOutcome;

/// Result type for board domain operations.
pub type BoardDomainResult<T> = Result<T, BoardDomainError>;
