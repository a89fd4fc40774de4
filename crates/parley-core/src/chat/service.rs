//! Chat service orchestrating the channel registry and message logs.
//!
//! The service is stateless: every operation is an independent round-trip to
//! the keyed store, and all shared mutable state lives there. No retries or
//! deduplication here -- a failed store call surfaces as an error and the
//! polling caller picks up on its next tick.

use std::sync::Arc;

use tracing::info;

use parley_types::error::ChatError;
use parley_types::message::{ChatMessage, LogEntry};

use crate::chat::log::{MessageLog, FETCH_WINDOW};
use crate::chat::registry::ChannelRegistry;
use crate::store::keyed::KeyedStore;

/// Channel read and posted to when the caller names none.
///
/// Never registered automatically; it must be created like any other channel
/// to appear in listings.
pub const DEFAULT_CHANNEL: &str = "general";

/// Orchestrates channel lifecycle and message persistence.
///
/// Generic over `KeyedStore`; registry and log share one store handle,
/// injected at construction so tests can substitute the in-memory store.
pub struct ChatService<S: KeyedStore> {
    registry: ChannelRegistry<S>,
    log: MessageLog<S>,
}

impl<S: KeyedStore> ChatService<S> {
    /// Create a chat service over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            registry: ChannelRegistry::new(store.clone()),
            log: MessageLog::new(store),
        }
    }

    /// Validate and append a message to a channel's log.
    ///
    /// Rejects an empty user or message (the message is not trimmed first;
    /// only channel creation trims). The timestamp is stamped here. Registry
    /// membership is deliberately not checked: posting to an unregistered
    /// channel grows an orphan log, matching the permissive model.
    pub async fn post_message(
        &self,
        channel: &str,
        user: &str,
        message: &str,
        avatar: Option<String>,
    ) -> Result<ChatMessage, ChatError> {
        if user.is_empty() || message.is_empty() {
            return Err(ChatError::MissingFields);
        }

        let msg = ChatMessage::now(user.to_string(), message.to_string(), avatar);
        self.log.append(channel, &msg).await?;
        Ok(msg)
    }

    /// The newest 20 entries for a channel, oldest-first.
    ///
    /// Defaults to `"general"` when no channel is named. An unknown channel
    /// and an empty one both yield an empty sequence.
    pub async fn fetch_messages(&self, channel: Option<&str>) -> Result<Vec<LogEntry>, ChatError> {
        let channel = channel.unwrap_or(DEFAULT_CHANNEL);
        Ok(self.log.fetch_recent(channel, FETCH_WINDOW).await?)
    }

    /// All registered channel names.
    pub async fn list_channels(&self) -> Result<Vec<String>, ChatError> {
        Ok(self.registry.list().await?)
    }

    /// Register a channel name (validated, idempotent).
    pub async fn create_channel(&self, name: &str) -> Result<String, ChatError> {
        self.registry.create(name).await
    }

    /// Unregister a channel and discard its message log.
    ///
    /// The log discard runs regardless of whether the channel was registered,
    /// clearing any orphan entries. Registry removal and log deletion are two
    /// store calls, not a transaction; a concurrent reader can observe one
    /// without the other.
    pub async fn delete_channel(&self, name: &str) -> Result<(), ChatError> {
        self.registry.delete(name).await?;
        self.log.delete(name).await?;
        info!(channel = %name, "channel deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryKeyedStore;

    fn service() -> ChatService<MemoryKeyedStore> {
        ChatService::new(Arc::new(MemoryKeyedStore::new()))
    }

    #[tokio::test]
    async fn test_post_then_fetch_includes_message() {
        let svc = service();
        svc.post_message("dev", "alice", "hello", None).await.unwrap();

        let entries = svc.fetch_messages(Some("dev")).await.unwrap();
        assert_eq!(entries.len(), 1);
        let msg = entries[0].as_message().unwrap();
        assert_eq!(msg.user, "alice");
        assert_eq!(msg.message, "hello");
    }

    #[tokio::test]
    async fn test_post_rejects_missing_fields() {
        let svc = service();
        assert!(matches!(
            svc.post_message("general", "", "hi", None).await,
            Err(ChatError::MissingFields)
        ));
        assert!(matches!(
            svc.post_message("general", "alice", "", None).await,
            Err(ChatError::MissingFields)
        ));
    }

    #[tokio::test]
    async fn test_post_does_not_trim_message() {
        let svc = service();
        // Whitespace-only message is non-empty, so it is accepted.
        let msg = svc.post_message("dev", "alice", "   ", None).await.unwrap();
        assert_eq!(msg.message, "   ");
    }

    #[tokio::test]
    async fn test_fetch_defaults_to_general() {
        let svc = service();
        svc.post_message("general", "bob", "default home", None)
            .await
            .unwrap();

        let entries = svc.fetch_messages(None).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].as_message().unwrap().message, "default home");
    }

    #[tokio::test]
    async fn test_two_posts_return_in_arrival_order() {
        let svc = service();
        svc.post_message("dev", "a", "m1", None).await.unwrap();
        svc.post_message("dev", "b", "m2", None).await.unwrap();

        let entries = svc.fetch_messages(Some("dev")).await.unwrap();
        let users: Vec<&str> = entries
            .iter()
            .map(|e| e.as_message().unwrap().user.as_str())
            .collect();
        assert_eq!(users, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_posting_to_unregistered_channel_is_allowed() {
        let svc = service();
        svc.post_message("never-created", "a", "orphan", None)
            .await
            .unwrap();

        // Orphan log exists, registry is untouched.
        assert_eq!(svc.fetch_messages(Some("never-created")).await.unwrap().len(), 1);
        assert!(svc.list_channels().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_registering_keeps_stray_entries() {
        let svc = service();
        svc.post_message("dev", "a", "early", None).await.unwrap();
        svc.create_channel("dev").await.unwrap();

        let entries = svc.fetch_messages(Some("dev")).await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_channel_removes_listing_and_log() {
        let svc = service();
        svc.create_channel("lobby").await.unwrap();
        svc.post_message("lobby", "a", "bye", None).await.unwrap();

        svc.delete_channel("lobby").await.unwrap();

        assert!(svc.list_channels().await.unwrap().is_empty());
        assert!(svc.fetch_messages(Some("lobby")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unregistered_channel_discards_orphan_log() {
        let svc = service();
        svc.post_message("stray", "a", "m", None).await.unwrap();
        svc.delete_channel("stray").await.unwrap();

        assert!(svc.fetch_messages(Some("stray")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_window_caps_at_twenty() {
        let svc = service();
        for i in 0..25 {
            svc.post_message("busy", "u", &format!("m{i}"), None)
                .await
                .unwrap();
        }

        let entries = svc.fetch_messages(Some("busy")).await.unwrap();
        assert_eq!(entries.len(), 20);
        assert_eq!(entries[0].as_message().unwrap().message, "m5");
        assert_eq!(entries[19].as_message().unwrap().message, "m24");
    }

    #[tokio::test]
    async fn test_avatar_carried_through() {
        let svc = service();
        svc.post_message("dev", "a", "m", Some("https://x/a.png".to_string()))
            .await
            .unwrap();

        let entries = svc.fetch_messages(Some("dev")).await.unwrap();
        assert_eq!(
            entries[0].as_message().unwrap().avatar.as_deref(),
            Some("https://x/a.png")
        );
    }
}
