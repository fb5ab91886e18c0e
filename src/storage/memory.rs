//! In-memory storage backend.
//!
//! Used by tests to exercise the fail-open paths without a database; writes
//! can be switched to fail on demand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{Result, StorageBackend, StorageError};

#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend preloaded with one entry, e.g. a corrupt blob for load tests.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .entries
            .lock()
            .expect("Backend lock poisoned")
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Make subsequent writes (and deletes) fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Raw stored value, for asserting on persisted payloads.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("Backend lock poisoned")
            .get(key)
            .cloned()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.stored(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .lock()
            .expect("Backend lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .lock()
            .expect("Backend lock poisoned")
            .remove(key);
        Ok(())
    }
}
