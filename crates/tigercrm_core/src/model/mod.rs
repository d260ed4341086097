//! CRM domain model.
//!
//! # Responsibility
//! - Define typed records for every persisted collection.
//! - Define draft (create) and patch (update) shapes per mutable entity.
//!
//! # Invariants
//! - Every record carries an `id` unique within its collection.
//! - Foreign keys (`contact_id`, `deal_id`) are plain ids; nothing enforces
//!   that the referenced record still exists.
//! - `created_date` is stamped once on create and never rewritten.

use crate::store::Collection;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod campaign;
pub mod contact;
pub mod deal;
pub mod interaction;
pub mod reference;
pub mod task;

/// Integer identifier, unique within one collection.
pub type RecordId = i64;

/// Wall-clock instant persisted as RFC 3339.
pub type Timestamp = DateTime<Utc>;

/// Any record persisted in a store collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Collection this record type lives in.
    const COLLECTION: Collection;

    fn id(&self) -> RecordId;
}

/// User-managed record with create/update lifecycle.
pub trait Entity: Record {
    /// Input for `create`. Carries no id and no timestamps.
    type Draft;
    /// Partial update; `None` leaves a field untouched.
    type Patch;

    /// Builds the stored record for a freshly assigned id.
    fn from_draft(id: RecordId, draft: Self::Draft, now: Timestamp) -> Self;

    /// Merges `patch` into `self` and stamps `updated_date`.
    fn apply_patch(&mut self, patch: Self::Patch, now: Timestamp);

    fn created_date(&self) -> Timestamp;
}

/// Replaces `target` only when the patch carries a value.
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
