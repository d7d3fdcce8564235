//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::{InMemoryBoardStore, RecordingRenderer},
    domain::{ContainerKey, TaskBoard, TaskId},
    services::{BoardService, CreateTaskRequest},
};

/// Service type wired to in-memory adapters.
pub type MemoryService = BoardService<InMemoryBoardStore, RecordingRenderer, DefaultClock>;

/// A service together with handles on its adapters.
pub struct MemoryBoard {
    /// Service under test.
    pub service: MemoryService,
    /// Store shared with the service.
    pub store: Arc<InMemoryBoardStore>,
    /// Renderer shared with the service.
    pub renderer: Arc<RecordingRenderer>,
}

impl MemoryBoard {
    /// Wires a service to the given store and a fresh renderer.
    #[must_use]
    pub fn over(store: Arc<InMemoryBoardStore>) -> Self {
        let renderer = Arc::new(RecordingRenderer::new());
        let service = BoardService::new(
            Arc::clone(&store),
            Arc::clone(&renderer),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            store,
            renderer,
        }
    }

    /// Creates a task with a fixed identifier in the given container.
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the task.
    pub async fn seed(&mut self, id: &str, container: ContainerKey) -> eyre::Result<TaskId> {
        let task = self
            .service
            .create_task(
                CreateTaskRequest::new(format!("Task {id}"))
                    .with_id(id)
                    .in_container(container),
            )
            .await?;
        Ok(task.id().clone())
    }
}

/// Provides a board over an empty in-memory store.
#[fixture]
pub fn memory_board() -> MemoryBoard {
    MemoryBoard::over(Arc::new(InMemoryBoardStore::new()))
}

/// Returns the identifiers listed in one container, as plain strings.
#[must_use]
pub fn listed(board: &TaskBoard, key: ContainerKey) -> Vec<String> {
    board
        .container(key)
        .task_ids()
        .iter()
        .map(ToString::to_string)
        .collect()
}
