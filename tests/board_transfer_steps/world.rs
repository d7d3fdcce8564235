//! Shared world state for board transfer BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::{InMemoryBoardStore, RecordingRenderer},
    domain::TransferOutcome,
    services::{BoardService, BoardServiceError},
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryBoardStore, RecordingRenderer, DefaultClock>;

/// Scenario world for board transfer behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub store: Arc<InMemoryBoardStore>,
    pub saves_before_action: Option<usize>,
    pub last_outcome: Option<TransferOutcome>,
    pub last_error: Option<BoardServiceError>,
}

impl BoardWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryBoardStore::new());
        let service = BoardService::new(
            Arc::clone(&store),
            Arc::new(RecordingRenderer::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            store,
            saves_before_action: None,
            last_outcome: None,
            last_error: None,
        }
    }

    /// Records the flush count before the first action of a scenario.
    pub fn mark_action(&mut self) {
        if self.saves_before_action.is_none() {
            self.saves_before_action = Some(self.store.save_count());
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
