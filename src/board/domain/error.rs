//! Error types for board domain validation and parsing.

use super::{SubtaskId, TaskId};
use thiserror::Error;

/// Errors returned by task store, transfer and subtask operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The referenced task is absent from the collection or the expected
    /// container list.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task has no subtask with the given identifier.
    #[error("task {task_id} has no subtask {subtask_id}")]
    SubtaskNotFound {
        /// Task that was searched.
        task_id: TaskId,
        /// Subtask identifier that did not match.
        subtask_id: SubtaskId,
    },

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured limit.
    #[error("task title has {actual} characters, limit is {max}")]
    TitleTooLong {
        /// Configured maximum title length in characters.
        max: usize,
        /// Actual title length in characters.
        actual: usize,
    },

    /// The task carries more subtasks than the configured limit.
    #[error("task has {actual} subtasks, limit is {max}")]
    TooManySubtasks {
        /// Configured maximum number of subtasks.
        max: usize,
        /// Actual number of subtasks.
        actual: usize,
    },

    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,
}

/// Error returned while parsing container keys from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown container key: {0}")]
pub struct ParseContainerKeyError(pub String);

/// Error returned while parsing task priorities from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
