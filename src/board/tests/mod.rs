//! Unit tests for the board module.


use crate::board::domain::{ContainerKey, Priority, Task, TaskBoard, TaskDraft, TaskId};
use mockable::DefaultClock;

/// Builds a task with the given identifier, container and subtask labels.
fn task(id: &str, container: ContainerKey, subtasks: &[&str]) -> Task {
    Task::from_draft(
        TaskDraft {
            id: TaskId::from(id),
            title: format!("Task {id}"),
            description: String::new(),
            category: "Technical Task".to_owned(),
            priority: Priority::Medium,
            created_at: "2024-05-01".to_owned(),
            assignees: Vec::new(),
            subtasks: subtasks.iter().map(|label| (*label).to_owned()).collect(),
            container_key: container,
        },
        &DefaultClock,
    )
}

/// Builds a board holding one task per `(id, container)` pair.
fn board_with(entries: &[(&str, ContainerKey)]) -> TaskBoard {
    let mut board = TaskBoard::new();
    for (id, container) in entries {
        board
            .insert(task(id, *container, &[]))
            .expect("fixture identifiers are unique");
    }
    board
}

/// Returns the identifiers listed in one container, as plain strings.
fn listed(board: &TaskBoard, key: ContainerKey) -> Vec<String> {
    board
        .container(key)
        .task_ids()
        .iter()
        .map(ToString::to_string)
        .collect()
}
