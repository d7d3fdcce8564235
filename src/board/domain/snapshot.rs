//! Serialized board state exchanged with the persistence port.

use super::{ContainerKey, Task, TaskBoard, TaskId};
use serde::{Deserialize, Serialize};

/// Board state as written to and read from storage.
///
/// The full collection and the four container sub-lists are stored side by
/// side. On restore the full collection decides which tasks exist and where
/// they belong; the sub-lists decide the order within each container, and
/// supply the tasks themselves when the collection is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    /// Every task in collection order.
    #[serde(default)]
    pub all_tasks: Vec<Task>,
    /// Tasks of the to-do container in container order.
    #[serde(default)]
    pub tasks_to_do: Vec<Task>,
    /// Tasks of the in-progress container in container order.
    #[serde(default)]
    pub tasks_in_progress: Vec<Task>,
    /// Tasks of the await-feedback container in container order.
    #[serde(default)]
    pub tasks_await_feedback: Vec<Task>,
    /// Tasks of the done container in container order.
    #[serde(default)]
    pub tasks_done: Vec<Task>,
}

impl BoardSnapshot {
    /// Captures the current board state.
    #[must_use]
    pub fn capture(board: &TaskBoard) -> Self {
        let collect = |key| board.tasks_in(key).cloned().collect::<Vec<_>>();
        Self {
            all_tasks: board.tasks().to_vec(),
            tasks_to_do: collect(ContainerKey::ToDo),
            tasks_in_progress: collect(ContainerKey::InProgress),
            tasks_await_feedback: collect(ContainerKey::AwaitFeedback),
            tasks_done: collect(ContainerKey::Done),
        }
    }

    /// Returns `true` when the snapshot holds no task at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_tasks.is_empty() && self.container_tasks().all(|(_, tasks)| tasks.is_empty())
    }

    /// Returns the sub-list stored for the given container.
    #[must_use]
    pub fn container_tasks_for(&self, key: ContainerKey) -> &[Task] {
        match key {
            ContainerKey::ToDo => &self.tasks_to_do,
            ContainerKey::InProgress => &self.tasks_in_progress,
            ContainerKey::AwaitFeedback => &self.tasks_await_feedback,
            ContainerKey::Done => &self.tasks_done,
        }
    }

    fn container_tasks(&self) -> impl Iterator<Item = (ContainerKey, &[Task])> {
        ContainerKey::ALL
            .into_iter()
            .map(|key| (key, self.container_tasks_for(key)))
    }

    /// Flattens the snapshot into the task sequence to restore.
    ///
    /// Uses the full collection when present. Otherwise the sub-lists are
    /// concatenated in board order and each task is stamped with the key of
    /// the sub-list it came from.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        if !self.all_tasks.is_empty() {
            return self.all_tasks;
        }
        let mut tasks = Vec::new();
        for (key, listed) in self.container_tasks() {
            tasks.extend(listed.iter().cloned().map(|mut task| {
                task.set_container_key(key);
                task
            }));
        }
        tasks
    }
}

/// Result of rebuilding a board from stored tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoredBoard {
    /// The rebuilt board.
    pub board: TaskBoard,
    /// Identifiers that appeared more than once; later copies were dropped.
    pub duplicates: Vec<TaskId>,
}

impl TaskBoard {
    /// Rebuilds a board from stored state, keeping the first occurrence of
    /// each identifier.
    ///
    /// Each container follows its stored sub-list order, taking only tasks
    /// whose container key names that container. Tasks the sub-lists miss
    /// are appended in collection order.
    #[must_use]
    pub fn restore(snapshot: BoardSnapshot) -> RestoredBoard {
        let stored_order: Vec<(ContainerKey, Vec<TaskId>)> = snapshot
            .container_tasks()
            .map(|(key, listed)| (key, listed.iter().map(|task| task.id().clone()).collect()))
            .collect();

        let mut board = Self::new();
        let mut duplicates = Vec::new();
        for task in snapshot.into_tasks() {
            if board.tasks.iter().any(|existing| existing.id() == task.id()) {
                duplicates.push(task.id().clone());
                continue;
            }
            board.tasks.push(task);
        }

        for (key, task_ids) in stored_order {
            for task_id in task_ids {
                let belongs = board
                    .tasks
                    .iter()
                    .any(|task| *task.id() == task_id && task.container_key() == key);
                let list = board.lists.get_mut(key);
                if belongs && !list.contains(&task_id) {
                    list.push(task_id);
                }
            }
        }
        for task in &board.tasks {
            let list = board.lists.get_mut(task.container_key());
            if !list.contains(task.id()) {
                list.push(task.id().clone());
            }
        }
        RestoredBoard { board, duplicates }
    }
}
