//! Task aggregate and its content types.

use super::{
    BoardDomainError, BoardDomainResult, ContainerKey, ParsePriorityError, SubtaskId, TaskId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Task urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Needs attention first.
    Urgent,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// A person assigned to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    /// Display name.
    pub name: String,
    /// Colour tag used for the assignee badge.
    pub color_tag: String,
}

impl Assignee {
    /// Creates an assignee.
    #[must_use]
    pub fn new(name: impl Into<String>, color_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_tag: color_tag.into(),
        }
    }

    /// Returns the badge initials: the first letter of the first two name
    /// parts.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// A checklist entry of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtask {
    id: SubtaskId,
    label: String,
    completed: bool,
}

impl Subtask {
    /// Creates an open subtask with a fresh identifier.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: SubtaskId::new(),
            label: label.into(),
            completed: false,
        }
    }

    /// Returns the subtask identifier.
    #[must_use]
    pub const fn id(&self) -> &SubtaskId {
        &self.id
    }

    /// Returns the subtask label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` when the subtask is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Parameter object for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Identifier to assign.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Display category.
    pub category: String,
    /// Task urgency.
    pub priority: Priority,
    /// Due or creation date as entered.
    pub created_at: String,
    /// Assigned people.
    pub assignees: Vec<Assignee>,
    /// Subtask labels, all initially open.
    pub subtasks: Vec<String>,
    /// Container the task starts in.
    pub container_key: ContainerKey,
}

/// Task aggregate.
///
/// Subtask identifiers, labels and statuses are held together so that the
/// three sequences of the serialized shape can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    category: String,
    priority: Priority,
    created_at: String,
    assignees: Vec<Assignee>,
    subtasks: Vec<Subtask>,
    container_key: ContainerKey,
    modified_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task from a draft, stamping the modification time.
    #[must_use]
    pub fn from_draft(draft: TaskDraft, clock: &impl Clock) -> Self {
        Self {
            id: draft.id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            created_at: draft.created_at,
            assignees: draft.assignees,
            subtasks: draft.subtasks.into_iter().map(Subtask::new).collect(),
            container_key: draft.container_key,
            modified_at: Some(clock.utc()),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the display category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the task urgency.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due or creation date as entered.
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Returns the assigned people in order.
    #[must_use]
    pub fn assignees(&self) -> &[Assignee] {
        &self.assignees
    }

    /// Returns the subtasks in order.
    #[must_use]
    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// Returns the container the task occupies.
    #[must_use]
    pub const fn container_key(&self) -> ContainerKey {
        self.container_key
    }

    /// Returns the time of the latest mutation, when known.
    #[must_use]
    pub const fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    pub(crate) fn stamp_container(&mut self, key: ContainerKey, clock: &impl Clock) {
        self.container_key = key;
        self.touch(clock);
    }

    pub(crate) const fn set_container_key(&mut self, key: ContainerKey) {
        self.container_key = key;
    }

    /// Flips the completion flag of one subtask and returns the new value.
    pub(crate) fn toggle_subtask(
        &mut self,
        subtask_id: &SubtaskId,
        clock: &impl Clock,
    ) -> BoardDomainResult<bool> {
        let subtask = self
            .subtasks
            .iter_mut()
            .find(|subtask| subtask.id == *subtask_id)
            .ok_or_else(|| BoardDomainError::SubtaskNotFound {
                task_id: self.id.clone(),
                subtask_id: subtask_id.clone(),
            })?;
        subtask.completed = !subtask.completed;
        let completed = subtask.completed;
        self.touch(clock);
        Ok(completed)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.modified_at = Some(clock.utc());
    }
}

/// Serialized task shape with index-aligned subtask sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    priority: Value,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    assignees: Vec<Assignee>,
    #[serde(default)]
    subtasks: Vec<String>,
    #[serde(default)]
    subtasks_id: Vec<SubtaskId>,
    #[serde(default)]
    subtasks_status: Vec<bool>,
    #[serde(default)]
    container_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    modified_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        let mut subtasks = Vec::with_capacity(task.subtasks.len());
        let mut subtasks_id = Vec::with_capacity(task.subtasks.len());
        let mut subtasks_status = Vec::with_capacity(task.subtasks.len());
        for subtask in task.subtasks {
            subtasks.push(subtask.label);
            subtasks_id.push(subtask.id);
            subtasks_status.push(subtask.completed);
        }

        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            category: task.category,
            priority: Value::from(task.priority.as_str()),
            created_at: task.created_at,
            assignees: task.assignees,
            subtasks,
            subtasks_id,
            subtasks_status,
            container_key: task.container_key.as_str().to_owned(),
            modified_at: task.modified_at,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        let label_count = record.subtasks.len();
        if record.subtasks_id.len() != label_count || record.subtasks_status.len() != label_count {
            warn!(
                task_id = %record.id,
                labels = label_count,
                ids = record.subtasks_id.len(),
                statuses = record.subtasks_status.len(),
                "normalizing misaligned subtask data"
            );
        }

        let mut ids = record.subtasks_id.into_iter();
        let mut statuses = record.subtasks_status.into_iter();
        let subtasks = record
            .subtasks
            .into_iter()
            .map(|label| Subtask {
                id: ids.next().unwrap_or_default(),
                label,
                completed: statuses.next().unwrap_or(false),
            })
            .collect();

        let container_key = ContainerKey::try_from(record.container_key.as_str())
            .unwrap_or_else(|err| {
                warn!(task_id = %record.id, error = %err, "placing task in to-do container");
                ContainerKey::ToDo
            });

        let priority = stored_priority(&record.priority).unwrap_or_else(|| {
            warn!(task_id = %record.id, priority = %record.priority, "using medium priority");
            Priority::Medium
        });

        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            category: record.category,
            priority,
            created_at: record.created_at,
            assignees: record.assignees,
            subtasks,
            container_key,
            modified_at: record.modified_at,
        }
    }
}

/// Reads a stored priority: a name in any case, or a list whose first
/// recognised entry wins. Absent values mean medium.
fn stored_priority(value: &Value) -> Option<Priority> {
    match value {
        Value::Null => Some(Priority::Medium),
        Value::String(name) => Priority::try_from(name.as_str()).ok(),
        Value::Array(entries) => entries
            .iter()
            .filter_map(Value::as_str)
            .find_map(|name| Priority::try_from(name).ok()),
        _ => None,
    }
}
