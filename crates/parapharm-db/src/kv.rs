//! # Key-Value Port
//!
//! The persistence contract the storefront store writes through.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read(key)          → Option<String>   (None when the key is absent)   │
//! │  write(key, value)  → ()               (insert or overwrite)           │
//! │  remove(key)        → ()               (absent key is not an error)    │
//! │                                                                         │
//! │  Implementations:                                                       │
//! │    KvRepository  ─── SQLite table kv_store (Database::kv())            │
//! │    MemoryStore   ─── HashMap, for tests and throwaway sessions         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are opaque strings here; the JSON shape belongs to parapharm-core.

use std::future::Future;

use tracing::warn;

use parapharm_core::{PersistedState, CART_AMOUNT_KEY, CART_ITEMS_KEY, FAVORITES_COUNT_KEY};

use crate::error::DbResult;

/// String-keyed, string-valued storage.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    fn read(&self, key: &str) -> impl Future<Output = DbResult<Option<String>>> + Send;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Deletes `key`.
    fn remove(&self, key: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Reads the three client-state keys.
///
/// A read error on any key is logged and treated as an absent value, so
/// startup always proceeds.
pub async fn load_persisted<S: KeyValueStore>(store: &S) -> PersistedState {
    PersistedState {
        cart_items: read_or_none(store, CART_ITEMS_KEY).await,
        cart_amount: read_or_none(store, CART_AMOUNT_KEY).await,
        favorites_count: read_or_none(store, FAVORITES_COUNT_KEY).await,
    }
}

async fn read_or_none<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.read(key).await {
        Ok(value) => value,
        Err(e) => {
            warn!(key = %key, error = %e, "Storage read failed, using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[tokio::test]
    async fn test_load_persisted_reads_all_keys() {
        let store = MemoryStore::new();
        store.write(CART_ITEMS_KEY, "[]").await.unwrap();
        store.write(FAVORITES_COUNT_KEY, "2").await.unwrap();

        let persisted = load_persisted(&store).await;

        assert_eq!(persisted.cart_items.as_deref(), Some("[]"));
        assert_eq!(persisted.cart_amount, None);
        assert_eq!(persisted.favorites_count.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_load_persisted_degrades_on_read_errors() {
        let store = MemoryStore::new();
        store.write(FAVORITES_COUNT_KEY, "2").await.unwrap();
        store.fail_reads(true);

        let persisted = load_persisted(&store).await;

        assert!(persisted.cart_items.is_none());
        assert!(persisted.favorites_count.is_none());
    }
}
