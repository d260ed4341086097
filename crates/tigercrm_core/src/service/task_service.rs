//! Task use-case service.
//!
//! # Responsibility
//! - Own task status changes; `TaskPatch` edits never touch status.
//! - Provide the task list ordering used by callers.
//!
//! # Invariants
//! - Completion stamps `completed_date` once; completing again is a no-op.
//! - Status never moves backwards.

use crate::clock::Clock;
use crate::model::task::{Task, TaskDraft, TaskPatch, TaskStatus};
use crate::model::RecordId;
use crate::query::{sort_tasks, tasks_with_status};
use crate::repo::entity_repo::{EntityRepository, TaskRepository};
use crate::repo::{RepoError, RepoResult};
use crate::storage::KeyValueStorage;
use crate::store::{Collection, Store};

pub struct TaskService<'s, S: KeyValueStorage> {
    repo: TaskRepository<'s, S>,
}

impl<'s, S: KeyValueStorage> TaskService<'s, S> {
    pub fn new(store: &'s Store<S>, clock: &'s dyn Clock) -> Self {
        Self {
            repo: TaskRepository::new(store, clock),
        }
    }

    /// Creates a Pending task.
    pub fn create_task(&self, draft: TaskDraft) -> RepoResult<Task> {
        self.repo.create(draft)
    }

    /// Edits task fields; status is preserved.
    pub fn update_task(&self, id: RecordId, patch: TaskPatch) -> RepoResult<Task> {
        self.repo.update(id, patch)
    }

    pub fn delete_task(&self, id: RecordId) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// Marks a task Completed and stamps the completion time.
    ///
    /// Already-completed tasks are returned unchanged.
    pub fn complete_task(&self, id: RecordId) -> RepoResult<Task> {
        let current = self.repo.get(id)?.ok_or(RepoError::NotFound {
            collection: Collection::Tasks,
            id,
        })?;
        if current.is_completed() {
            return Ok(current);
        }

        self.repo.modify(id, |task, now| {
            task.status = TaskStatus::Completed;
            task.completed_date = Some(now);
            task.updated_date = Some(now);
            Ok(())
        })
    }

    /// Moves a Pending task to In Progress.
    pub fn start_task(&self, id: RecordId) -> RepoResult<Task> {
        self.repo.modify(id, |task, now| {
            if !task.status.can_advance_to(TaskStatus::InProgress) {
                return Err(RepoError::InvalidTransition {
                    id,
                    from: task.status,
                    to: TaskStatus::InProgress,
                });
            }
            task.status = TaskStatus::InProgress;
            task.updated_date = Some(now);
            Ok(())
        })
    }

    /// Lists tasks, optionally by status: open first, then by due date.
    pub fn list_tasks(&self, status: Option<TaskStatus>) -> RepoResult<Vec<Task>> {
        let all = self.repo.list()?;
        let mut tasks = match status {
            Some(status) => tasks_with_status(&all, status),
            None => all,
        };
        sort_tasks(&mut tasks);
        Ok(tasks)
    }
}
