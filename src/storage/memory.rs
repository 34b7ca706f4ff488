//! In-memory key-value store
//!
//! Used by tests and as the fallback when the browser refuses access to
//! `localStorage`. State lives only as long as the store.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{KeyValueStore, StorageResult};

/// A `KeyValueStore` backed by a map
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: seed an entry
    pub fn with_item(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
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
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("theme").unwrap(), None);

        store.set_item("theme", "dark").unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));

        // Last write wins
        store.set_item("theme", "light").unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.len(), 1);

        store.remove_item("theme").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = MemoryStore::new().with_item("a", "1");
        store.remove_item("b").unwrap();
        assert_eq!(store.len(), 1);
    }
}
