//! Renderer that records what it was asked to draw.

use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{ContainerKey, TaskBoard},
    ports::BoardRenderer,
};

/// Per-refresh record: task counts per container in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRecord {
    /// Total number of tasks on the board.
    pub total: usize,
    /// Number of tasks per container, in [`ContainerKey::ALL`] order.
    pub per_container: [usize; 4],
}

/// Thread-safe renderer that keeps a record of every refresh.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    records: Arc<RwLock<Vec<RenderRecord>>>,
}

impl RecordingRenderer {
    /// Creates a renderer with no recorded refreshes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of refreshes so far.
    #[must_use]
    pub fn refresh_count(&self) -> usize {
        self.records.read().map_or(0, |records| records.len())
    }

    /// Returns the most recent refresh record.
    #[must_use]
    pub fn last(&self) -> Option<RenderRecord> {
        self.records
            .read()
            .ok()
            .and_then(|records| records.last().copied())
    }
}

impl BoardRenderer for RecordingRenderer {
    fn refresh(&self, board: &TaskBoard) {
        let per_container = ContainerKey::ALL.map(|key| board.container(key).len());
        if let Ok(mut records) = self.records.write() {
            records.push(RenderRecord {
                total: board.len(),
                per_container,
            });
        }
    }
}
