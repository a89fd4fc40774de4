//! Per-channel bounded message log.
//!
//! Each channel owns one store list at `chat:<name>`, newest-first, capped to
//! the most recent 100 entries. The log key is independent of registry
//! membership: appending to an unregistered channel grows an orphan log.

use std::sync::Arc;

use tracing::debug;

use parley_types::error::StoreError;
use parley_types::message::{ChatMessage, LogEntry};

use crate::store::keyed::KeyedStore;

/// Maximum number of entries retained per channel log.
pub const MAX_LOG_LEN: i64 = 100;

/// Number of entries returned by a recent-messages read.
pub const FETCH_WINDOW: i64 = 20;

/// Derive the store key for a channel's message log.
pub fn log_key(channel: &str) -> String {
    format!("chat:{channel}")
}

/// Bounded, newest-first append log of messages for named channels.
pub struct MessageLog<S: KeyedStore> {
    store: Arc<S>,
}

impl<S: KeyedStore> MessageLog<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Serialize and prepend a message, then trim the log to the retention
    /// bound.
    ///
    /// Push and trim are each atomic but not atomic as a pair: a concurrent
    /// reader can briefly observe more than 100 entries. The next trim
    /// restores the bound, so the excess is transient and self-healing.
    pub async fn append(&self, channel: &str, msg: &ChatMessage) -> Result<(), StoreError> {
        let raw = serde_json::to_string(msg)
            .map_err(|e| StoreError::Backend(format!("failed to serialize message: {e}")))?;
        let key = log_key(channel);

        self.store.list_push_front(&key, &raw).await?;
        self.store.list_trim(&key, 0, MAX_LOG_LEN - 1).await?;

        debug!(channel = %channel, user = %msg.user, "message appended");
        Ok(())
    }

    /// Read the newest `limit` entries, oldest-first for display.
    ///
    /// Entries that fail to parse as messages are passed through as raw
    /// strings rather than dropped. A channel with no log yields an empty
    /// sequence, indistinguishable from an empty channel.
    pub async fn fetch_recent(&self, channel: &str, limit: i64) -> Result<Vec<LogEntry>, StoreError> {
        let raw = self.store.list_range(&log_key(channel), 0, limit - 1).await?;

        let mut entries: Vec<LogEntry> = raw.into_iter().map(LogEntry::from_stored).collect();
        entries.reverse();
        Ok(entries)
    }

    /// Discard the channel's entire log. No-op if it never had messages.
    pub async fn delete(&self, channel: &str) -> Result<(), StoreError> {
        self.store.list_delete(&log_key(channel)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryKeyedStore;

    fn log() -> (Arc<MemoryKeyedStore>, MessageLog<MemoryKeyedStore>) {
        let store = Arc::new(MemoryKeyedStore::new());
        (store.clone(), MessageLog::new(store))
    }

    fn msg(user: &str, text: &str, ts: i64) -> ChatMessage {
        ChatMessage {
            user: user.to_string(),
            message: text.to_string(),
            avatar: None,
            timestamp: ts,
        }
    }

    #[tokio::test]
    async fn test_append_then_fetch_oldest_first() {
        let (_, log) = log();
        log.append("dev", &msg("a", "m1", 1)).await.unwrap();
        log.append("dev", &msg("b", "m2", 2)).await.unwrap();

        let entries = log.fetch_recent("dev", FETCH_WINDOW).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].as_message().unwrap().message, "m1");
        assert_eq!(entries[1].as_message().unwrap().message, "m2");
    }

    #[tokio::test]
    async fn test_retention_bound_holds_after_overflow() {
        let (store, log) = log();
        for i in 0..130 {
            log.append("busy", &msg("u", &format!("m{i}"), i)).await.unwrap();
        }

        let stored = store.list_range(&log_key("busy"), 0, -1).await.unwrap();
        assert_eq!(stored.len(), MAX_LOG_LEN as usize);

        // Newest-first storage: position 0 is the last append, position 99
        // the oldest survivor (append #30).
        let newest: ChatMessage = serde_json::from_str(&stored[0]).unwrap();
        let oldest: ChatMessage = serde_json::from_str(&stored[99]).unwrap();
        assert_eq!(newest.message, "m129");
        assert_eq!(oldest.message, "m30");
    }

    #[tokio::test]
    async fn test_fetch_caps_at_window() {
        let (_, log) = log();
        for i in 0..30 {
            log.append("busy", &msg("u", &format!("m{i}"), i)).await.unwrap();
        }

        let entries = log.fetch_recent("busy", FETCH_WINDOW).await.unwrap();
        assert_eq!(entries.len(), 20);
        // Oldest of the returned window first, newest last.
        assert_eq!(entries[0].as_message().unwrap().message, "m10");
        assert_eq!(entries[19].as_message().unwrap().message, "m29");
    }

    #[tokio::test]
    async fn test_fetch_missing_channel_is_empty() {
        let (_, log) = log();
        assert!(log.fetch_recent("nowhere", FETCH_WINDOW).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_entry_passes_through_raw() {
        let (store, log) = log();
        log.append("dev", &msg("a", "fine", 1)).await.unwrap();
        store
            .list_push_front(&log_key("dev"), "{{garbage")
            .await
            .unwrap();

        let entries = log.fetch_recent("dev", FETCH_WINDOW).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].as_message().unwrap().message, "fine");
        assert_eq!(entries[1], LogEntry::Raw("{{garbage".to_string()));
    }

    #[tokio::test]
    async fn test_delete_discards_log() {
        let (_, log) = log();
        log.append("dev", &msg("a", "m", 1)).await.unwrap();
        log.delete("dev").await.unwrap();
        log.delete("dev").await.unwrap(); // no-op without a log

        assert!(log.fetch_recent("dev", FETCH_WINDOW).await.unwrap().is_empty());
    }
}
