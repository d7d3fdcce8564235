//! The task store: the full task collection and its partition into the four
//! container lists.

use super::{
    BoardDomainError, BoardDomainResult, ContainerKey, ContainerList, ContainerLists, SubtaskId,
    Task, TaskId,
};
use mockable::Clock;

/// Canonical board state.
///
/// Every task in the collection appears in exactly one container list, the
/// one named by its container key. All mutating methods keep this partition
/// intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    pub(super) tasks: Vec<Task>,
    pub(super) lists: ContainerLists,
}

impl TaskBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every task in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the list backing the given container.
    #[must_use]
    pub const fn container(&self, key: ContainerKey) -> &ContainerList {
        self.lists.get(key)
    }

    /// Returns the four container lists.
    #[must_use]
    pub const fn containers(&self) -> &ContainerLists {
        &self.lists
    }

    /// Iterates the tasks of one container in container order.
    pub fn tasks_in(&self, key: ContainerKey) -> impl Iterator<Item = &Task> {
        self.lists
            .get(key)
            .task_ids()
            .iter()
            .filter_map(|task_id| self.tasks.iter().find(|task| task.id() == task_id))
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no task matches.
    pub fn find_by_id(&self, task_id: &TaskId) -> BoardDomainResult<&Task> {
        self.tasks
            .iter()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))
    }

    pub(super) fn find_by_id_mut(&mut self, task_id: &TaskId) -> BoardDomainResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))
    }

    /// Scans the four container lists for the task and returns the container
    /// holding it.
    ///
    /// The scan reads list membership, not the task's stored key.
    #[must_use]
    pub fn locate(&self, task_id: &TaskId) -> Option<ContainerKey> {
        self.lists.locate(task_id)
    }

    /// Adds a task to the collection and appends it to the list named by its
    /// container key.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when the identifier is
    /// already in use; the board is left unchanged.
    pub fn insert(&mut self, task: Task) -> BoardDomainResult<()> {
        if self.tasks.iter().any(|existing| existing.id() == task.id()) {
            return Err(BoardDomainError::DuplicateTask(task.id().clone()));
        }
        self.lists
            .get_mut(task.container_key())
            .push(task.id().clone());
        self.tasks.push(task);
        Ok(())
    }

    /// Removes a task from the collection and from its container list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the task is absent;
    /// nothing is mutated in that case.
    pub fn remove_by_id(&mut self, task_id: &TaskId) -> BoardDomainResult<Task> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == task_id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))?;
        let removed = self.tasks.remove(position);
        self.lists.detach(task_id);
        Ok(removed)
    }

    /// Flips the completion flag of one subtask of a task and returns the
    /// new value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] or
    /// [`BoardDomainError::SubtaskNotFound`] when either lookup fails.
    pub fn toggle_subtask(
        &mut self,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
        clock: &impl Clock,
    ) -> BoardDomainResult<bool> {
        self.find_by_id_mut(task_id)?
            .toggle_subtask(subtask_id, clock)
    }

    /// Empties the collection and all four container lists.
    ///
    /// Persisting the empty state is the caller's responsibility.
    pub fn clear_all(&mut self) {
        self.tasks.clear();
        self.lists.clear();
    }

    /// Clears the four lists and refills them from each task's container
    /// key, in collection order.
    pub fn rebuild_partition(&mut self) {
        self.lists.clear();
        for task in &self.tasks {
            self.lists
                .get_mut(task.container_key())
                .push(task.id().clone());
        }
    }

    /// Returns `true` when every task sits in exactly one list, that list
    /// matches its container key, and the lists hold nothing else.
    #[must_use]
    pub fn is_partitioned(&self) -> bool {
        let listed: usize = self.lists.iter().map(ContainerList::len).sum();
        listed == self.tasks.len()
            && self.tasks.iter().all(|task| {
                self.lists
                    .iter()
                    .filter(|list| list.contains(task.id()))
                    .map(ContainerList::key)
                    .eq(std::iter::once(task.container_key()))
            })
    }
}
