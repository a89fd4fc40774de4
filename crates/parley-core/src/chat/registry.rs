//! Channel registry over the store's set primitive.
//!
//! Registry membership is the sole existence state for a channel: a channel
//! absent from the set is considered non-existent even if its message log
//! still holds entries.

use std::sync::Arc;

use tracing::info;

use parley_types::error::{ChatError, StoreError};

use crate::store::keyed::KeyedStore;

/// Store key for the set of all registered channel names.
pub const CHANNEL_SET_KEY: &str = "channels";

/// Maintains the set of known channel names.
///
/// Generic over `KeyedStore` so tests can inject the in-memory store
/// (parley-core never depends on parley-infra).
pub struct ChannelRegistry<S: KeyedStore> {
    store: Arc<S>,
}

impl<S: KeyedStore> ChannelRegistry<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All registered channel names, no implied order. Side-effect free.
    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        self.store.set_members(CHANNEL_SET_KEY).await
    }

    /// Register a channel name.
    ///
    /// Fails with `EmptyChannelName` if the name is empty after trimming
    /// surrounding whitespace; no other charset or length validation. The
    /// name is stored as supplied. Registering an already-present name is a
    /// no-op, not an error.
    pub async fn create(&self, name: &str) -> Result<String, ChatError> {
        if name.trim().is_empty() {
            return Err(ChatError::EmptyChannelName);
        }

        self.store.set_add(CHANNEL_SET_KEY, name).await?;
        info!(channel = %name, "channel registered");
        Ok(name.to_string())
    }

    /// Unregister a channel name. No-op if it was never registered.
    pub async fn delete(&self, name: &str) -> Result<(), StoreError> {
        self.store.set_remove(CHANNEL_SET_KEY, name).await?;
        info!(channel = %name, "channel unregistered");
        Ok(())
    }
}
