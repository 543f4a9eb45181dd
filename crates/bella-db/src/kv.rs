//! # Key-Value Store
//!
//! Durable string-keyed storage for the admin session.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                    trait KeyValueStore                                  │
//! │                 get / set_all / remove_all                              │
//! │                    │                    │                               │
//! │                    ▼                    ▼                               │
//! │     SqliteKeyValueStore        MemoryKeyValueStore                      │
//! │     kv_store table (sqlx)      HashMap behind a Mutex                  │
//! │     survives restarts          tests; can be told to fail              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Atomicity
//! `set_all` and `remove_all` apply every key or none. The session store
//! relies on this to keep `admin-token` and `admin-user` together.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// String key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> DbResult<Option<String>>;

    /// Writes every entry in one atomic step.
    async fn set_all(&self, entries: &[(&str, &str)]) -> DbResult<()>;

    /// Deletes every key in one atomic step. Missing keys are ignored.
    async fn remove_all(&self, keys: &[&str]) -> DbResult<()>;

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        self.set_all(&[(key, value)]).await
    }

    async fn remove(&self, key: &str) -> DbResult<()> {
        self.remove_all(&[key]).await
    }
}

// =============================================================================
// SQLite
// =============================================================================

/// [`KeyValueStore`] over the `kv_store` table.
#[derive(Debug, Clone)]
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteKeyValueStore { pool }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    async fn set_all(&self, entries: &[(&str, &str)]) -> DbResult<()> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        for (key, value) in entries {
            sqlx::query(
                r#"
                INSERT INTO kv_store (key, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(*key)
            .bind(*value)
            .bind(now.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(count = entries.len(), "Stored keys");
        Ok(())
    }

    async fn remove_all(&self, keys: &[&str]) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        for key in keys {
            sqlx::query("DELETE FROM kv_store WHERE key = ?")
                .bind(*key)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(count = keys.len(), "Removed keys");
        Ok(())
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// [`KeyValueStore`] kept in process memory.
///
/// `set_failing(true)` makes every operation return
/// [`DbError::ConnectionFailed`], to exercise storage-fault paths.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    failing: AtomicBool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        MemoryKeyValueStore::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> DbResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::ConnectionFailed("storage unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        self.check()?;
        Ok(self.lock().get(key).cloned())
    }

    async fn set_all(&self, entries: &[(&str, &str)]) -> DbResult<()> {
        self.check()?;
        let mut map = self.lock();
        for (key, value) in entries {
            map.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    async fn remove_all(&self, keys: &[&str]) -> DbResult<()> {
        self.check()?;
        let mut map = self.lock();
        for key in keys {
            map.remove(*key);
        }
        Ok(())
    }
}
