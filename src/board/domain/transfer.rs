//! Moving tasks between containers.
//!
//! Two request shapes reach the board. A drop names only the task and the
//! target; the task is found in the full collection and detached from
//! whichever list holds it. A category selection first resolves the task's
//! current list by scanning all four lists, then moves it out of that list.
//! Both append to the tail of the target and never duplicate a task that is
//! already there.

use super::{BoardDomainError, BoardDomainResult, ContainerKey, TaskBoard, TaskId};
use mockable::Clock;

/// Result of a transfer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The task left `from` and now sits at the tail of `to`.
    Moved {
        /// Task that moved.
        task_id: TaskId,
        /// Container the task was listed in, if any list held it.
        from: Option<ContainerKey>,
        /// Container the task now occupies.
        to: ContainerKey,
    },
    /// The task already sat in the target; its position is unchanged.
    AlreadyInPlace {
        /// Task that was addressed.
        task_id: TaskId,
        /// Container the task occupies.
        container: ContainerKey,
    },
    /// The target identifier named no container; nothing changed.
    Ignored,
}

impl TransferOutcome {
    /// Returns `true` when the board state was touched and must be flushed.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl TaskBoard {
    /// Moves a task found in the full collection to the target container.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the collection has no
    /// such task; the board is left unchanged.
    pub fn transfer(
        &mut self,
        task_id: &TaskId,
        target: ContainerKey,
        clock: &impl Clock,
    ) -> BoardDomainResult<TransferOutcome> {
        self.find_by_id(task_id)?;
        Ok(self.place(task_id, target, clock))
    }

    /// Moves a task out of an explicitly named source list into the target
    /// container.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the source list does
    /// not hold the task or the collection has no such task; the board is
    /// left unchanged.
    pub fn transfer_from(
        &mut self,
        task_id: &TaskId,
        source: ContainerKey,
        target: ContainerKey,
        clock: &impl Clock,
    ) -> BoardDomainResult<TransferOutcome> {
        if !self.lists.get(source).contains(task_id) {
            return Err(BoardDomainError::TaskNotFound(task_id.clone()));
        }
        self.find_by_id(task_id)?;
        Ok(self.place(task_id, target, clock))
    }

    /// Resolves the task's current list by membership scan, then moves it to
    /// the target container.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no list holds the
    /// task.
    pub fn transfer_by_membership(
        &mut self,
        task_id: &TaskId,
        target: ContainerKey,
        clock: &impl Clock,
    ) -> BoardDomainResult<TransferOutcome> {
        let source = self
            .locate(task_id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))?;
        self.transfer_from(task_id, source, target, clock)
    }

    /// Callers must have checked that the task exists.
    fn place(
        &mut self,
        task_id: &TaskId,
        target: ContainerKey,
        clock: &impl Clock,
    ) -> TransferOutcome {
        let target_list = self.lists.get(target);
        let listed_elsewhere = ContainerKey::ALL
            .into_iter()
            .filter(|key| *key != target)
            .any(|key| self.lists.get(key).contains(task_id));

        if target_list.contains(task_id) && !listed_elsewhere {
            if let Ok(task) = self.find_by_id_mut(task_id) {
                task.stamp_container(target, clock);
            }
            return TransferOutcome::AlreadyInPlace {
                task_id: task_id.clone(),
                container: target,
            };
        }

        let from = self.lists.detach(task_id);
        if let Ok(task) = self.find_by_id_mut(task_id) {
            task.stamp_container(target, clock);
        }
        self.lists.get_mut(target).push(task_id.clone());
        TransferOutcome::Moved {
            task_id: task_id.clone(),
            from,
            to: target,
        }
    }
}
