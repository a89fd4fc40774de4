//! Chat message and stored log entry types for Parley.
//!
//! Messages are immutable once stored and carry no identifier; ordering is
//! positional within a channel's log. Log entries decode leniently: a stored
//! value that is not a valid message is surfaced as an opaque raw string.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single chat message within a channel.
///
/// `avatar` is always serialized (as `null` when absent) so the wire shape
/// stays stable for polling clients. `timestamp` is epoch milliseconds,
/// stamped server-side at post time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub user: String,
    pub message: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub timestamp: i64,
}

impl ChatMessage {
    /// Build a message stamped with the current time.
    ///
    /// An empty-string avatar normalizes to `None`.
    pub fn now(user: String, message: String, avatar: Option<String>) -> Self {
        Self {
            user,
            message,
            avatar: avatar.filter(|a| !a.is_empty()),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// A decoded entry from a channel's message log.
///
/// Decoding is lenient: an entry that fails to parse as a [`ChatMessage`]
/// degrades to `Raw` instead of failing the whole fetch, so one corrupted or
/// legacy value never breaks a read. The untagged representation serializes
/// `Message` as the object and `Raw` as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LogEntry {
    Message(ChatMessage),
    Raw(String),
}

impl LogEntry {
    /// Decode a stored value, falling back to `Raw` on parse failure.
    pub fn from_stored(raw: String) -> Self {
        match serde_json::from_str::<ChatMessage>(&raw) {
            Ok(msg) => LogEntry::Message(msg),
            Err(_) => LogEntry::Raw(raw),
        }
    }

    /// The structured message, if this entry decoded as one.
    pub fn as_message(&self) -> Option<&ChatMessage> {
        match self {
            LogEntry::Message(msg) => Some(msg),
            LogEntry::Raw(_) => None,
        }
    }
}
