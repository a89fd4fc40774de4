//! Keyed store trait.
//!
//! Defines the set and list primitives the chat backend is built on.
//! Implementations live in parley-infra (durable) and in this crate
//! (in-memory, for tests and local development).

use parley_types::error::StoreError;

/// Trait for a keyed store exposing atomic set and list primitives.
///
/// Each individual operation is atomic with respect to its key; sequences of
/// operations are not transactional, and callers must tolerate the windows
/// that opens (e.g. a push observed before its trailing trim).
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait KeyedStore: Send + Sync {
    /// Add a member to a set. Idempotent: adding a present member is a no-op.
    fn set_add(
        &self,
        key: &str,
        member: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Remove a member from a set. No-op if the member is absent.
    fn set_remove(
        &self,
        key: &str,
        member: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// All members of a set, no implied order. Empty for a missing key.
    fn set_members(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, StoreError>> + Send;

    /// Prepend a value to a list, creating the list if missing.
    fn list_push_front(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Keep only the elements at positions `start..=stop`, discarding the rest.
    ///
    /// Negative indices count from the end of the list, as in Redis LTRIM.
    fn list_trim(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// The elements at positions `start..=stop`. Empty for a missing key or
    /// an out-of-bounds window. Negative indices count from the end.
    fn list_range(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> impl std::future::Future<Output = Result<Vec<String>, StoreError>> + Send;

    /// Delete an entire list key. No-op if the key does not exist.
    fn list_delete(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
