//! Board controller: owns the task store and sequences every mutation as
//! mutate, flush, render.

use crate::board::{
    config::BoardConfig,
    domain::{
        BoardDomainError, ContainerKey, ContainerTarget, SubtaskId, SubtaskProgress,
        SubtaskState, Task, TaskBoard, TaskDraft, TaskId, TransferOutcome, subtask_states,
    },
    ports::{BoardPersistence, BoardRenderer, PersistenceError},
    services::{
        requests::CreateTaskRequest,
        sync::{load_all, save_all},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation or lookup failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Single controller for one board.
///
/// Mutations take `&mut self`, so two operations can never interleave
/// against the same board. Each successful mutation is followed by exactly
/// one persistence flush and one renderer refresh. A failed flush is logged
/// and remembered but the in-memory change stands.
pub struct BoardService<P, R, C>
where
    P: BoardPersistence,
    R: BoardRenderer,
    C: Clock + Send + Sync,
{
    board: TaskBoard,
    persistence: Arc<P>,
    renderer: Arc<R>,
    clock: Arc<C>,
    config: BoardConfig,
    last_flush_error: Option<PersistenceError>,
}

impl<P, R, C> BoardService<P, R, C>
where
    P: BoardPersistence,
    R: BoardRenderer,
    C: Clock + Send + Sync,
{
    /// Creates a service over an empty board with the default
    /// configuration.
    #[must_use]
    pub fn new(persistence: Arc<P>, renderer: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            board: TaskBoard::new(),
            persistence,
            renderer,
            clock,
            config: BoardConfig::default(),
            last_flush_error: None,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the error of the most recent flush, if it failed.
    #[must_use]
    pub const fn last_flush_error(&self) -> Option<&PersistenceError> {
        self.last_flush_error.as_ref()
    }

    /// Replaces the board with the stored state and refreshes the renderer.
    ///
    /// Absent or corrupt state leaves an empty board. Returns the number of
    /// tasks loaded.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) -> usize {
        self.board = load_all(&*self.persistence).await;
        self.renderer.refresh(&self.board);
        self.board.len()
    }

    /// Looks up a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no task matches.
    pub fn find_task(&self, task_id: &TaskId) -> BoardServiceResult<&Task> {
        Ok(self.board.find_by_id(task_id)?)
    }

    /// Computes the checklist progress of a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no task matches.
    pub fn progress(&self, task_id: &TaskId) -> BoardServiceResult<SubtaskProgress> {
        Ok(SubtaskProgress::of(self.board.find_by_id(task_id)?))
    }

    /// Projects the subtask display states of a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no task matches.
    pub fn subtask_states(&self, task_id: &TaskId) -> BoardServiceResult<Vec<SubtaskState>> {
        Ok(subtask_states(self.board.find_by_id(task_id)?))
    }

    /// Creates a task and places it at the tail of its container.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the request violates the
    /// configured limits or the identifier is already in use.
    #[tracing::instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_task(&mut self, request: CreateTaskRequest) -> BoardServiceResult<Task> {
        let draft = self.validate(request)?;
        let task = Task::from_draft(draft, &*self.clock);
        self.board.insert(task.clone())?;
        info!(task_id = %task.id(), container = %task.container_key(), "task created");
        self.commit().await;
        Ok(task)
    }

    /// Moves a task to the container under a drop point.
    ///
    /// An identifier naming no container is ignored: nothing changes,
    /// nothing is flushed and [`TransferOutcome::Ignored`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the board has no such
    /// task.
    #[tracing::instrument(skip(self), fields(task_id = %task_id))]
    pub async fn drop_task(
        &mut self,
        task_id: &TaskId,
        target_identifier: &str,
    ) -> BoardServiceResult<TransferOutcome> {
        let ContainerTarget::Known(target) = ContainerTarget::resolve(target_identifier) else {
            debug!(target_identifier, "ignoring drop on unknown container");
            return Ok(TransferOutcome::Ignored);
        };
        self.transfer(task_id, target).await
    }

    /// Moves a task to a container chosen by category selection.
    ///
    /// The task's current container is found by scanning all four lists on
    /// every call. An identifier naming no container is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no container list
    /// holds the task.
    #[tracing::instrument(skip(self), fields(task_id = %task_id))]
    pub async fn move_to_category(
        &mut self,
        task_id: &TaskId,
        category_identifier: &str,
    ) -> BoardServiceResult<TransferOutcome> {
        let ContainerTarget::Known(target) = ContainerTarget::resolve(category_identifier) else {
            debug!(category_identifier, "ignoring move to unknown category");
            return Ok(TransferOutcome::Ignored);
        };
        let outcome = self
            .board
            .transfer_by_membership(task_id, target, &*self.clock)
            .inspect_err(|err| warn!(error = %err, "category move rejected"))?;
        debug!(?outcome, "task moved by category");
        self.commit().await;
        Ok(outcome)
    }

    /// Moves a task found in the full collection to the given container.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the board has no such
    /// task.
    #[tracing::instrument(skip(self), fields(task_id = %task_id))]
    pub async fn transfer(
        &mut self,
        task_id: &TaskId,
        target: ContainerKey,
    ) -> BoardServiceResult<TransferOutcome> {
        let outcome = self
            .board
            .transfer(task_id, target, &*self.clock)
            .inspect_err(|err| warn!(error = %err, "transfer rejected"))?;
        debug!(?outcome, "task transferred");
        self.commit().await;
        Ok(outcome)
    }

    /// Flips the completion flag of one subtask and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] or
    /// [`BoardDomainError::SubtaskNotFound`] when either lookup fails.
    #[tracing::instrument(skip(self), fields(task_id = %task_id, subtask_id = %subtask_id))]
    pub async fn toggle_subtask(
        &mut self,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
    ) -> BoardServiceResult<bool> {
        let completed = self
            .board
            .toggle_subtask(task_id, subtask_id, &*self.clock)
            .inspect_err(|err| warn!(error = %err, "subtask toggle rejected"))?;
        self.commit().await;
        Ok(completed)
    }

    /// Deletes a task from the collection and its container list, then
    /// re-derives the partition and flushes once.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the task is absent;
    /// nothing is mutated or flushed in that case.
    #[tracing::instrument(skip(self), fields(task_id = %task_id))]
    pub async fn delete_task(&mut self, task_id: &TaskId) -> BoardServiceResult<Task> {
        let removed = self
            .board
            .remove_by_id(task_id)
            .inspect_err(|err| warn!(error = %err, "delete rejected"))?;
        self.board.rebuild_partition();
        info!("task deleted");
        self.commit().await;
        Ok(removed)
    }

    /// Removes every task and flushes the empty state.
    #[tracing::instrument(skip(self))]
    pub async fn clear_all(&mut self) {
        let cleared = self.board.len();
        self.board.clear_all();
        info!(cleared, "board cleared");
        self.commit().await;
    }

    fn validate(&self, request: CreateTaskRequest) -> BoardServiceResult<TaskDraft> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(BoardDomainError::EmptyTitle.into());
        }
        let title_length = title.chars().count();
        if title_length > self.config.max_title_length {
            return Err(BoardDomainError::TitleTooLong {
                max: self.config.max_title_length,
                actual: title_length,
            }
            .into());
        }
        if request.subtasks.len() > self.config.max_subtasks {
            return Err(BoardDomainError::TooManySubtasks {
                max: self.config.max_subtasks,
                actual: request.subtasks.len(),
            }
            .into());
        }
        let id = request
            .id
            .map(TaskId::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(TaskDraft {
            id,
            title: title.to_owned(),
            description: request.description,
            category: request.category,
            priority: request.priority,
            created_at: request.created_at,
            assignees: request.assignees,
            subtasks: request.subtasks,
            container_key: request.container.unwrap_or(self.config.default_container),
        })
    }

    async fn commit(&mut self) {
        match save_all(&*self.persistence, &self.board).await {
            Ok(()) => self.last_flush_error = None,
            Err(err) => {
                error!(error = %err, "failed to persist board state");
                self.last_flush_error = Some(err);
            }
        }
        self.renderer.refresh(&self.board);
    }
}
