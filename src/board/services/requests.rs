//! Request payloads accepted by the board service.

use crate::board::domain::{Assignee, ContainerKey, Priority};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(super) id: Option<String>,
    pub(super) title: String,
    pub(super) description: String,
    pub(super) category: String,
    pub(super) priority: Priority,
    pub(super) created_at: String,
    pub(super) assignees: Vec<Assignee>,
    pub(super) subtasks: Vec<String>,
    pub(super) container: Option<ContainerKey>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: String::new(),
            category: String::new(),
            priority: Priority::default(),
            created_at: String::new(),
            assignees: Vec::new(),
            subtasks: Vec::new(),
            container: None,
        }
    }

    /// Uses a caller-assigned identifier instead of a generated one.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the display category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the task urgency.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due or creation date.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// Sets the assigned people.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = Assignee>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }

    /// Sets the subtask labels.
    #[must_use]
    pub fn with_subtasks<S: Into<String>>(mut self, subtasks: impl IntoIterator<Item = S>) -> Self {
        self.subtasks = subtasks.into_iter().map(Into::into).collect();
        self
    }

    /// Places the task in the given container instead of the configured
    /// default.
    #[must_use]
    pub const fn in_container(mut self, container: ContainerKey) -> Self {
        self.container = Some(container);
        self
    }
}
