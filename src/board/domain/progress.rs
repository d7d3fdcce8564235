//! Subtask progress and per-subtask display state.

use super::{SubtaskId, Task};
use serde::Serialize;
use std::fmt;

/// Completion counts of a task's checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubtaskProgress {
    /// Number of completed subtasks.
    pub completed: usize,
    /// Number of subtasks.
    pub total: usize,
}

impl SubtaskProgress {
    /// Counts the completed subtasks of a task.
    #[must_use]
    pub fn of(task: &Task) -> Self {
        let subtasks = task.subtasks();
        Self {
            completed: subtasks.iter().filter(|subtask| subtask.is_completed()).count(),
            total: subtasks.len(),
        }
    }

    /// Returns `false` for tasks without subtasks, which show no progress
    /// bar at all.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.total > 0
    }

    /// Returns the completed share in whole percent, rounded down.
    ///
    /// Tasks without subtasks report zero.
    #[must_use]
    pub fn percent(self) -> usize {
        self.completed
            .saturating_mul(100)
            .checked_div(self.total)
            .unwrap_or(0)
    }
}

impl fmt::Display for SubtaskProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} Subtasks", self.completed, self.total)
    }
}

/// How one subtask is shown: struck through and checked when completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtaskState {
    /// Subtask identifier.
    pub id: SubtaskId,
    /// Subtask label.
    pub label: String,
    /// Whether the label is struck through.
    pub line_through: bool,
    /// Whether the checkbox is ticked.
    pub checked: bool,
}

/// Projects a task's subtask statuses into display states, in order.
#[must_use]
pub fn subtask_states(task: &Task) -> Vec<SubtaskState> {
    task.subtasks()
        .iter()
        .map(|subtask| SubtaskState {
            id: subtask.id().clone(),
            label: subtask.label().to_owned(),
            line_through: subtask.is_completed(),
            checked: subtask.is_completed(),
        })
        .collect()
}
