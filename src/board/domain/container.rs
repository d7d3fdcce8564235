//! Container keys, container identifiers and per-container ordered lists.
//!
//! The four board containers are fixed. Every identifier the event surface
//! can produce (drop-zone element ids, category-button identifiers and the
//! storage keys themselves) is classified into a [`ContainerTarget`]; an
//! identifier that names none of the four containers classifies as
//! [`ContainerTarget::Unknown`].

use super::{ParseContainerKeyError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The container a task currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContainerKey {
    /// Work not yet started.
    #[serde(rename = "for-To-Do-Container")]
    ToDo,
    /// Work under way.
    #[serde(rename = "in-Progress-Container")]
    InProgress,
    /// Work waiting for feedback.
    #[serde(rename = "for-Await-Feedback-Container")]
    AwaitFeedback,
    /// Finished work.
    #[serde(rename = "for-Done-Container")]
    Done,
}

impl ContainerKey {
    /// All containers in board order.
    pub const ALL: [Self; 4] = [Self::ToDo, Self::InProgress, Self::AwaitFeedback, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "for-To-Do-Container",
            Self::InProgress => "in-Progress-Container",
            Self::AwaitFeedback => "for-Await-Feedback-Container",
            Self::Done => "for-Done-Container",
        }
    }

    /// Returns the identifier of the drop zone rendering this container.
    #[must_use]
    pub const fn drop_zone_id(self) -> &'static str {
        match self {
            Self::ToDo => "target-to-do-table",
            Self::InProgress => "target-in-progress-table",
            Self::AwaitFeedback => "target-await-feedback-table",
            Self::Done => "target-done-table",
        }
    }

    /// Returns the identifier of the category button selecting this
    /// container.
    #[must_use]
    pub const fn category_id(self) -> &'static str {
        match self {
            Self::ToDo => "to-do-category",
            Self::InProgress => "in-progress-category",
            Self::AwaitFeedback => "await-feedback-category",
            Self::Done => "done-category",
        }
    }

    /// Returns the column heading shown for this container.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ToDo => "To do",
            Self::InProgress => "In progress",
            Self::AwaitFeedback => "Await feedback",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for ContainerKey {
    type Error = ParseContainerKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == trimmed)
            .ok_or_else(|| ParseContainerKeyError(value.to_owned()))
    }
}

impl fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a drop or category target identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerTarget {
    /// The identifier names one of the four containers.
    Known(ContainerKey),
    /// The identifier names no container; requests against it are ignored.
    Unknown,
}

impl ContainerTarget {
    /// Classifies a drop-zone id, category-button id or storage key.
    #[must_use]
    pub fn resolve(identifier: &str) -> Self {
        let trimmed = identifier.trim();
        ContainerKey::ALL
            .into_iter()
            .find(|key| {
                key.drop_zone_id() == trimmed
                    || key.category_id() == trimmed
                    || key.as_str() == trimmed
            })
            .map_or(Self::Unknown, Self::Known)
    }

    /// Returns the container key when the target is known.
    #[must_use]
    pub const fn key(self) -> Option<ContainerKey> {
        match self {
            Self::Known(key) => Some(key),
            Self::Unknown => None,
        }
    }
}

/// Ordered list of the tasks occupying one container.
///
/// Order is insertion order: tasks are appended at the tail and never
/// reordered within the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerList {
    key: ContainerKey,
    task_ids: Vec<TaskId>,
}

impl ContainerList {
    /// Creates an empty list for the given container.
    #[must_use]
    pub const fn new(key: ContainerKey) -> Self {
        Self {
            key,
            task_ids: Vec::new(),
        }
    }

    /// Returns the container this list backs.
    #[must_use]
    pub const fn key(&self) -> ContainerKey {
        self.key
    }

    /// Returns the task identifiers in container order.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns `true` when the task is in this list.
    #[must_use]
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.task_ids.iter().any(|id| id == task_id)
    }

    /// Returns the number of tasks in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` when the list holds no task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    pub(crate) fn push(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    /// Removes every occurrence of the task, returning whether one existed.
    pub(crate) fn remove(&mut self, task_id: &TaskId) -> bool {
        let before = self.task_ids.len();
        self.task_ids.retain(|id| id != task_id);
        self.task_ids.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.task_ids.clear();
    }
}

/// Returns the container key a list backs.
///
/// Lists are always constructed for a concrete container, so the inverse
/// mapping is total.
#[must_use]
pub const fn key_for_list(list: &ContainerList) -> ContainerKey {
    list.key()
}

/// The four container lists, addressed by [`ContainerKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerLists {
    to_do: ContainerList,
    in_progress: ContainerList,
    await_feedback: ContainerList,
    done: ContainerList,
}

impl Default for ContainerLists {
    fn default() -> Self {
        Self {
            to_do: ContainerList::new(ContainerKey::ToDo),
            in_progress: ContainerList::new(ContainerKey::InProgress),
            await_feedback: ContainerList::new(ContainerKey::AwaitFeedback),
            done: ContainerList::new(ContainerKey::Done),
        }
    }
}

impl ContainerLists {
    /// Returns the list backing the given container.
    #[must_use]
    pub const fn get(&self, key: ContainerKey) -> &ContainerList {
        match key {
            ContainerKey::ToDo => &self.to_do,
            ContainerKey::InProgress => &self.in_progress,
            ContainerKey::AwaitFeedback => &self.await_feedback,
            ContainerKey::Done => &self.done,
        }
    }

    pub(crate) const fn get_mut(&mut self, key: ContainerKey) -> &mut ContainerList {
        match key {
            ContainerKey::ToDo => &mut self.to_do,
            ContainerKey::InProgress => &mut self.in_progress,
            ContainerKey::AwaitFeedback => &mut self.await_feedback,
            ContainerKey::Done => &mut self.done,
        }
    }

    /// Iterates the four lists in board order.
    pub fn iter(&self) -> impl Iterator<Item = &ContainerList> {
        ContainerKey::ALL.into_iter().map(|key| self.get(key))
    }

    /// Scans all four lists and returns the container holding the task.
    #[must_use]
    pub fn locate(&self, task_id: &TaskId) -> Option<ContainerKey> {
        self.iter()
            .find(|list| list.contains(task_id))
            .map(key_for_list)
    }

    /// Removes the task from every list, returning the first container that
    /// held it.
    pub(crate) fn detach(&mut self, task_id: &TaskId) -> Option<ContainerKey> {
        let mut found = None;
        for key in ContainerKey::ALL {
            if self.get_mut(key).remove(task_id) && found.is_none() {
                found = Some(key);
            }
        }
        found
    }

    pub(crate) fn clear(&mut self) {
        for key in ContainerKey::ALL {
            self.get_mut(key).clear();
        }
    }
}
