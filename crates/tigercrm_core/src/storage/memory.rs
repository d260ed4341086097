//! In-memory key/value storage.

use super::{KeyValueStorage, StorageResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Process-local storage with no persistence.
///
/// Single-threaded by construction (`RefCell`), matching the one-writer
/// model of the store.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns stored keys in ascending order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl KeyValueStorage for MemoryKeyValueStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKeyValueStorage;
    use crate::storage::KeyValueStorage;

    #[test]
    fn set_replaces_previous_value() {
        let storage = MemoryKeyValueStorage::new();
        storage.set_item("tm_contacts", "[]").unwrap();
        storage.set_item("tm_contacts", "[{\"id\":1}]").unwrap();

        assert_eq!(
            storage.get_item("tm_contacts").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let storage = MemoryKeyValueStorage::new();
        storage.remove_item("missing").unwrap();
        assert!(storage.keys().is_empty());
    }
}
