//! Key-value state store backing wizard sessions.
//!
//! Keys are scoped to `(namespace, key)` so several subsystems can share
//! one store without colliding. Values are opaque strings; the wizard
//! registry stores JSON snapshots in them.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
    time::{SystemTime, UNIX_EPOCH},
};

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Process-external session state, narrowed to what the wizard registry
/// needs: read, write-through, conditional first write, and eviction.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Get a value by namespace and key.
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>>;

    /// Set a value. Inserts or updates the entry.
    async fn put(&self, namespace: &str, key: &str, value: &str) -> Result<()>;

    /// Insert only when no entry exists for the key. Returns whether the
    /// store happened; an existing entry is left untouched.
    async fn put_if_absent(&self, namespace: &str, key: &str, value: &str) -> Result<bool>;

    /// Delete a single key. Returns whether an entry was removed.
    async fn delete(&self, namespace: &str, key: &str) -> Result<bool>;
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// SQLite-backed state store.
pub struct SqliteStateStore {
    pool: sqlx::SqlitePool,
}

impl SqliteStateStore {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StateStore for SqliteStateStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT value FROM wizard_state WHERE namespace = ? AND key = ?",
        )
        .bind(namespace)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn put(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"INSERT INTO wizard_state (namespace, key, value, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT(namespace, key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at"#,
        )
        .bind(namespace)
        .bind(key)
        .bind(value)
        .bind(now_ms())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn put_if_absent(&self, namespace: &str, key: &str, value: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"INSERT INTO wizard_state (namespace, key, value, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT(namespace, key) DO NOTHING"#,
        )
        .bind(namespace)
        .bind(key)
        .bind(value)
        .bind(now_ms())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, namespace: &str, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM wizard_state WHERE namespace = ? AND key = ?")
            .bind(namespace)
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// In-memory state store for tests and embedders without a database.
#[derive(Default)]
pub struct MemoryStateStore {
    entries: Mutex<HashMap<(String, String), String>>,
}

impl MemoryStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<MutexGuard<'_, HashMap<(String, String), String>>> {
        self.entries
            .lock()
            .map_err(|_| Error::lock_failed("state mutex poisoned"))
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let entries = self.locked()?;
        Ok(entries
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    async fn put(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        let mut entries = self.locked()?;
        entries.insert((namespace.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    async fn put_if_absent(&self, namespace: &str, key: &str, value: &str) -> Result<bool> {
        let mut entries = self.locked()?;
        let slot = (namespace.to_string(), key.to_string());
        if entries.contains_key(&slot) {
            return Ok(false);
        }
        entries.insert(slot, value.to_string());
        Ok(true)
    }

    async fn delete(&self, namespace: &str, key: &str) -> Result<bool> {
        let mut entries = self.locked()?;
        Ok(entries
            .remove(&(namespace.to_string(), key.to_string()))
            .is_some())
    }
}
