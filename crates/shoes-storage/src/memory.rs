//! # In-Memory Store
//!
//! A `SnapshotStore` backed by a mutex-guarded map. Used by tests and by
//! sessions that do not want durable persistence.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{StorageError, StorageResult};
use crate::store::SnapshotStore;

/// In-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an initial value (useful for hydration tests).
    pub fn with_entry(key: impl Into<String>, bytes: Vec<u8>) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .expect("fresh mutex cannot be poisoned")
            .insert(key.into(), bytes);
        store
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
