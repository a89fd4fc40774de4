//! SQLite keyed store implementation.
//!
//! Implements `KeyedStore` from `parley-core` over two tables: `set_members`
//! for set primitives and `list_entries` for list primitives. List order is
//! carried by a `seq` column that decreases toward the head, so a prepend is
//! one INSERT and head-to-tail order is ascending `seq`. Every operation is a
//! single statement on the serialized writer (or a read on the reader pool),
//! which provides the per-operation atomicity the trait promises.

use sqlx::Row;

use parley_core::store::keyed::KeyedStore;
use parley_types::error::StoreError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `KeyedStore`.
pub struct SqliteKeyedStore {
    pool: DatabasePool,
}

impl SqliteKeyedStore {
    /// Create a new keyed store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    async fn list_len(&self, key: &str) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM list_entries WHERE list_key = ?")
            .bind(key)
            .fetch_one(&self.pool.reader)
            .await
            .map_err(store_err)?;
        row.try_get("n").map_err(store_err)
    }

    /// Resolve an inclusive window into `(offset, limit)` against the current
    /// list length, Redis-style: negative indices count from the end, and the
    /// window clamps to the list bounds. `None` means an empty window.
    async fn resolve_window(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Result<Option<(i64, i64)>, StoreError> {
        let len = self.list_len(key).await?;
        if len == 0 {
            return Ok(None);
        }
        let start = if start < 0 { (len + start).max(0) } else { start };
        let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
        if start > stop || start >= len || stop < 0 {
            return Ok(None);
        }
        Ok(Some((start, stop - start + 1)))
    }
}

fn store_err(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
            StoreError::Connection
        }
        other => StoreError::Backend(other.to_string()),
    }
}

impl KeyedStore for SqliteKeyedStore {
    async fn set_add(&self, key: &str, member: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT OR IGNORE INTO set_members (set_key, member) VALUES (?, ?)")
            .bind(key)
            .bind(member)
            .execute(&self.pool.writer)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM set_members WHERE set_key = ? AND member = ?")
            .bind(key)
            .bind(member)
            .execute(&self.pool.writer)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query("SELECT member FROM set_members WHERE set_key = ? ORDER BY member")
            .bind(key)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(store_err)?;

        let mut members = Vec::with_capacity(rows.len());
        for row in &rows {
            members.push(row.try_get("member").map_err(store_err)?);
        }
        Ok(members)
    }

    async fn list_push_front(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // Single statement, so the head seq cannot move between the subselect
        // and the insert (writes are serialized on one connection anyway).
        sqlx::query(
            r#"INSERT INTO list_entries (list_key, seq, value)
               VALUES (?, (SELECT COALESCE(MIN(seq), 0) - 1 FROM list_entries WHERE list_key = ?), ?)"#,
        )
        .bind(key)
        .bind(key)
        .bind(value)
        .execute(&self.pool.writer)
        .await
        .map_err(store_err)?;
        Ok(())
    }

    async fn list_trim(&self, key: &str, start: i64, stop: i64) -> Result<(), StoreError> {
        match self.resolve_window(key, start, stop).await? {
            Some((offset, limit)) => {
                sqlx::query(
                    r#"DELETE FROM list_entries
                       WHERE list_key = ?
                         AND seq NOT IN (
                             SELECT seq FROM list_entries WHERE list_key = ?
                             ORDER BY seq ASC LIMIT ? OFFSET ?
                         )"#,
                )
                .bind(key)
                .bind(key)
                .bind(limit)
                .bind(offset)
                .execute(&self.pool.writer)
                .await
                .map_err(store_err)?;
            }
            None => {
                sqlx::query("DELETE FROM list_entries WHERE list_key = ?")
                    .bind(key)
                    .execute(&self.pool.writer)
                    .await
                    .map_err(store_err)?;
            }
        }
        Ok(())
    }

    async fn list_range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError> {
        let Some((offset, limit)) = self.resolve_window(key, start, stop).await? else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query(
            "SELECT value FROM list_entries WHERE list_key = ? ORDER BY seq ASC LIMIT ? OFFSET ?",
        )
        .bind(key)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(store_err)?;

        let mut values = Vec::with_capacity(rows.len());
        for row in &rows {
            values.push(row.try_get("value").map_err(store_err)?);
        }
        Ok(values)
    }

    async fn list_delete(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM list_entries WHERE list_key = ?")
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(store_err)?;
        Ok(())
    }
}
