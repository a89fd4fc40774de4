use thiserror::Error;

/// Errors from keyed store operations (used by trait definitions in parley-core).
///
/// The store is trusted for per-operation atomicity; a failed call is
/// reported upward without retries.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error")]
    Connection,

    #[error("store operation failed: {0}")]
    Backend(String),
}

/// Errors related to chat operations.
///
/// The validation variants are user-correctable and map to a 400-equivalent
/// at the request boundary; `Store` propagates as a generic failure.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("user and message fields are required")]
    MissingFields,

    #[error("channel name is required")]
    EmptyChannelName,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ChatError {
    /// Whether this error is a request validation failure (vs a store failure).
    pub fn is_validation(&self) -> bool {
        matches!(self, ChatError::MissingFields | ChatError::EmptyChannelName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Backend("disk full".to_string());
        assert_eq!(err.to_string(), "store operation failed: disk full");
    }

    #[test]
    fn test_chat_error_display() {
        assert_eq!(
            ChatError::MissingFields.to_string(),
            "user and message fields are required"
        );
        assert_eq!(
            ChatError::EmptyChannelName.to_string(),
            "channel name is required"
        );
    }

    #[test]
    fn test_store_error_wraps_transparently() {
        let err: ChatError = StoreError::Connection.into();
        assert_eq!(err.to_string(), "store connection error");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_classification() {
        assert!(ChatError::MissingFields.is_validation());
        assert!(ChatError::EmptyChannelName.is_validation());
    }
}
