//! # In-Memory Store
//!
//! A [`KeyValueStore`] backed by a `HashMap`.
//!
//! Used by tests and by sessions that should not touch disk. Reads and
//! writes can be made to fail on demand to exercise the degradation paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::error::{DbError, DbResult};
use crate::kv::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Creates a store pre-filled with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = MemoryStore::new();
        if let Ok(mut map) = store.entries.lock() {
            map.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        }
        store
    }

    /// Makes every subsequent `read` fail (or succeed again).
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `write`/`remove` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Synchronous peek, for assertions.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().ok().and_then(|map| map.get(key).cloned())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| DbError::Internal("memory store mutex poisoned".to_string()))
    }

    fn check(&self, flag: &AtomicBool, op: &str) -> DbResult<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable(format!("{} disabled", op)));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    async fn read(&self, key: &str) -> DbResult<Option<String>> {
        self.check(&self.fail_reads, "read")?;
        Ok(self.lock()?.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> DbResult<()> {
        self.check(&self.fail_writes, "write")?;
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> DbResult<()> {
        self.check(&self.fail_writes, "remove")?;
        self.lock()?.remove(key);
        Ok(())
    }
}
