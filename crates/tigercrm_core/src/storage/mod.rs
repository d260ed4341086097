//! Key/value storage backends.
//!
//! # Responsibility
//! - Define the string key/value contract the store persists through.
//! - Provide a SQLite backend and an in-memory backend.
//!
//! # Invariants
//! - `set_item` replaces the full value stored under a key.
//! - Backends never interpret values; encoding belongs to `crate::store`.
//! - Backends are single-writer; concurrent writers may clobber each other.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKeyValueStorage;
pub use sqlite::SqliteKeyValueStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by storage backends and the store encoding layer.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Records could not be encoded for persistence.
    Serialize(serde_json::Error),
    /// The largest stored id leaves no room for another record.
    IdSpaceExhausted { collection: &'static str },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "storage requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "storage requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "storage requires column `{column}` in table `{table}`")
            }
            Self::Serialize(err) => write!(f, "failed to encode records: {err}"),
            Self::IdSpaceExhausted { collection } => {
                write!(f, "no ids left in collection `{collection}`")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. }
            | Self::IdSpaceExhausted { .. } => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// String key/value persistence contract.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes `key`. Removing an absent key is a no-op.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
