//! Keyed collection persistence over a `KeyValueStorage`.
//!
//! # Responsibility
//! - Map each collection to one storage key holding a JSON array.
//! - Assign record ids as `max(id) + 1`.
//! - Own the one-time seeding flag.
//!
//! # Invariants
//! - Every write replaces the whole collection; there are no partial writes.
//! - A corrupt payload reads as an empty collection and is only logged.
//! - No locking: two writers interleaving read/modify/write lose updates.

use crate::model::{Record, RecordId};
use crate::storage::{KeyValueStorage, StorageError, StorageResult};
use log::warn;

/// Namespace prefix shared by every storage key.
pub const STORAGE_KEY_PREFIX: &str = "tm_";

const SEEDED_FLAG_KEY: &str = "tm_seeded";
const SEEDED_FLAG_VALUE: &str = "1";

/// Persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Contacts,
    Deals,
    Tasks,
    Interactions,
    Campaigns,
    Stores,
    Neighborhoods,
    ZipCodes,
}

impl Collection {
    pub const ALL: [Collection; 8] = [
        Collection::Contacts,
        Collection::Deals,
        Collection::Tasks,
        Collection::Interactions,
        Collection::Campaigns,
        Collection::Stores,
        Collection::Neighborhoods,
        Collection::ZipCodes,
    ];

    /// Collection name as persisted, without the key prefix.
    pub fn name(self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Deals => "deals",
            Self::Tasks => "tasks",
            Self::Interactions => "interactions",
            Self::Campaigns => "campaigns",
            Self::Stores => "stores",
            Self::Neighborhoods => "neighborhoods",
            Self::ZipCodes => "zipcodes",
        }
    }

    /// Full storage key, e.g. `tm_contacts`.
    pub fn storage_key(self) -> String {
        format!("{STORAGE_KEY_PREFIX}{}", self.name())
    }
}

/// Collection store over an injected storage backend.
pub struct Store<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> Store<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the full collection for `T` in stored order.
    ///
    /// Returns an empty vector when the key is absent or its payload cannot
    /// be decoded.
    pub fn get<T: Record>(&self) -> StorageResult<Vec<T>> {
        let collection = T::COLLECTION;
        let Some(raw) = self.storage.get_item(&collection.storage_key())? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(
                    "event=store_read_corrupt module=store collection={} bytes={} error={}",
                    collection.name(),
                    raw.len(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the full collection for `T`.
    pub fn set<T: Record>(&self, records: &[T]) -> StorageResult<()> {
        let payload = serde_json::to_string(records)?;
        self.storage
            .set_item(&T::COLLECTION.storage_key(), &payload)
    }

    /// Returns the id the next created `T` will receive.
    pub fn next_id<T: Record>(&self) -> StorageResult<RecordId> {
        let records = self.get::<T>()?;
        next_id_for(&records)
    }

    /// Returns whether reference data has already been seeded.
    pub fn is_seeded(&self) -> StorageResult<bool> {
        let flag = self.storage.get_item(SEEDED_FLAG_KEY)?;
        Ok(flag.is_some_and(|value| !value.is_empty()))
    }

    pub fn mark_seeded(&self) -> StorageResult<()> {
        self.storage.set_item(SEEDED_FLAG_KEY, SEEDED_FLAG_VALUE)
    }
}

/// `max(id) + 1` over `records`, or `1` when empty.
///
/// # Errors
/// - `IdSpaceExhausted` when the largest stored id is `RecordId::MAX`.
pub fn next_id_for<T: Record>(records: &[T]) -> StorageResult<RecordId> {
    match records.iter().map(Record::id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(StorageError::IdSpaceExhausted {
            collection: T::COLLECTION.name(),
        }),
    }
}
