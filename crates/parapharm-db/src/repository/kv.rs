//! # Key-Value Repository
//!
//! SQLite implementation of [`KeyValueStore`] over the `kv_store` table.
//!
//! ## Write-Through Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Store effect              SQL                                          │
//! │  ────────────────────      ─────────────────────────────────────────    │
//! │  write(cartItems, json) ─► INSERT ... ON CONFLICT(key) DO UPDATE        │
//! │  remove(cartItems)      ─► DELETE FROM kv_store WHERE key = ?1          │
//! │  read(cartItems)        ─► SELECT value FROM kv_store WHERE key = ?1    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::kv::KeyValueStore;

/// Repository for the `kv_store` table.
#[derive(Debug, Clone)]
pub struct KvRepository {
    pool: SqlitePool,
}

impl KvRepository {
    /// Creates a new KvRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KvRepository { pool }
    }
}

impl KeyValueStore for KvRepository {
    async fn read(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    async fn write(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "kv write");

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> DbResult<()> {
        debug!(key = %key, "kv remove");

        sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
