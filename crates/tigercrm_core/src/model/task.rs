//! Follow-up task record and its status lifecycle.
//!
//! # Invariants
//! - Status only moves forward: Pending -> In Progress -> Completed, or
//!   Pending -> Completed directly.
//! - Editing a task (`TaskPatch`) never touches its status.
//! - `completed_date` is set exactly when status becomes Completed.

use super::{merge, Entity, Record, RecordId, Timestamp};
use crate::store::Collection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DEFAULT_TASK_TYPE: &str = "Follow Up";
const DEFAULT_PRIORITY: &str = "Normal";
const DEFAULT_OWNER: &str = "Jason";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
        }
    }

    /// Returns whether moving from `self` to `next` is a forward step.
    pub fn can_advance_to(self, next: TaskStatus) -> bool {
        next.rank() > self.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    #[serde(default)]
    pub description: String,
    pub task_type: Option<String>,
    pub contact_id: Option<RecordId>,
    pub deal_id: Option<RecordId>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub status: TaskStatus,
    pub completed_date: Option<Timestamp>,
    pub created_date: Timestamp,
    pub updated_date: Option<Timestamp>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub description: String,
    pub task_type: Option<String>,
    pub contact_id: Option<RecordId>,
    pub deal_id: Option<RecordId>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
}

impl TaskDraft {
    /// Creates a normal-priority follow-up draft owned by Jason.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            task_type: Some(DEFAULT_TASK_TYPE.to_string()),
            contact_id: None,
            deal_id: None,
            due_date: None,
            priority: Some(DEFAULT_PRIORITY.to_string()),
            assigned_to: Some(DEFAULT_OWNER.to_string()),
        }
    }
}

/// Editable task fields. Status changes go through `TaskService`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub task_type: Option<Option<String>>,
    pub contact_id: Option<Option<RecordId>>,
    pub deal_id: Option<Option<RecordId>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub priority: Option<Option<String>>,
    pub assigned_to: Option<Option<String>>,
}

impl Record for Task {
    const COLLECTION: Collection = Collection::Tasks;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    fn from_draft(id: RecordId, draft: TaskDraft, now: Timestamp) -> Self {
        Self {
            id,
            description: draft.description,
            task_type: draft.task_type,
            contact_id: draft.contact_id,
            deal_id: draft.deal_id,
            due_date: draft.due_date,
            priority: draft.priority,
            assigned_to: draft.assigned_to,
            status: TaskStatus::Pending,
            completed_date: None,
            created_date: now,
            updated_date: Some(now),
        }
    }

    fn apply_patch(&mut self, patch: TaskPatch, now: Timestamp) {
        merge(&mut self.description, patch.description);
        merge(&mut self.task_type, patch.task_type);
        merge(&mut self.contact_id, patch.contact_id);
        merge(&mut self.deal_id, patch.deal_id);
        merge(&mut self.due_date, patch.due_date);
        merge(&mut self.priority, patch.priority);
        merge(&mut self.assigned_to, patch.assigned_to);
        self.updated_date = Some(now);
    }

    fn created_date(&self) -> Timestamp {
        self.created_date
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStatus;

    #[test]
    fn status_only_advances_forward() {
        assert!(TaskStatus::Pending.can_advance_to(TaskStatus::InProgress));
        assert!(TaskStatus::Pending.can_advance_to(TaskStatus::Completed));
        assert!(TaskStatus::InProgress.can_advance_to(TaskStatus::Completed));
        assert!(!TaskStatus::Completed.can_advance_to(TaskStatus::Pending));
        assert!(!TaskStatus::InProgress.can_advance_to(TaskStatus::InProgress));
    }

    #[test]
    fn in_progress_uses_spaced_wire_name() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let parsed: TaskStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(parsed, TaskStatus::InProgress);
    }
}
