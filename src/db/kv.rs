//! Keyed string blobs, the persistence capability behind every store.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors raised by a key-value backend.
#[derive(Error, Debug)]
pub enum KvError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous string storage addressed by key.
///
/// `set` replaces the whole value in one step, so a reader never observes a
/// partially written blob.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Stores `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), KvError>;
}

/// SQLite-backed store using the `kv_store` table.
#[derive(Clone)]
pub struct SqliteKvStore {
    pool: SqlitePool,
}

impl SqliteKvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let updated_at = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(&updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// In-memory store. Clones share the same map.
///
/// Reads and writes can be switched to fail, which is how tests exercise the
/// silent-failure paths of the stores.
#[derive(Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing any failure switch.
    pub async fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().await.insert(key.into(), value.into());
    }

    /// Reads a raw value, bypassing any failure switch.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(KvError::Unavailable(format!("read of '{}' rejected", key)));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KvError::Unavailable(format!("write of '{}' rejected", key)));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
