//! Logged communication with a contact (call, text, visit, ...).

use super::{merge, Entity, Record, RecordId, Timestamp};
use crate::store::Collection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: RecordId,
    pub contact_id: Option<RecordId>,
    /// Channel, e.g. "Phone Call". Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// "Inbound" or "Outbound".
    pub direction: Option<String>,
    pub subject: Option<String>,
    pub notes: Option<String>,
    pub outcome: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
    pub created_date: Timestamp,
    pub updated_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionDraft {
    pub contact_id: Option<RecordId>,
    pub kind: Option<String>,
    pub direction: Option<String>,
    pub subject: Option<String>,
    pub notes: Option<String>,
    pub outcome: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionPatch {
    pub contact_id: Option<Option<RecordId>>,
    pub kind: Option<Option<String>>,
    pub direction: Option<Option<String>>,
    pub subject: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub outcome: Option<Option<String>>,
    pub follow_up_date: Option<Option<NaiveDate>>,
}

impl Record for Interaction {
    const COLLECTION: Collection = Collection::Interactions;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Entity for Interaction {
    type Draft = InteractionDraft;
    type Patch = InteractionPatch;

    fn from_draft(id: RecordId, draft: InteractionDraft, now: Timestamp) -> Self {
        Self {
            id,
            contact_id: draft.contact_id,
            kind: draft.kind,
            direction: draft.direction,
            subject: draft.subject,
            notes: draft.notes,
            outcome: draft.outcome,
            follow_up_date: draft.follow_up_date,
            created_date: now,
            // Interactions are logged, not edited; no update stamp until patched.
            updated_date: None,
        }
    }

    fn apply_patch(&mut self, patch: InteractionPatch, now: Timestamp) {
        merge(&mut self.contact_id, patch.contact_id);
        merge(&mut self.kind, patch.kind);
        merge(&mut self.direction, patch.direction);
        merge(&mut self.subject, patch.subject);
        merge(&mut self.notes, patch.notes);
        merge(&mut self.outcome, patch.outcome);
        merge(&mut self.follow_up_date, patch.follow_up_date);
        self.updated_date = Some(now);
    }

    fn created_date(&self) -> Timestamp {
        self.created_date
    }
}
