//! In-memory keyed store implementation.
//!
//! Implements `KeyedStore` over dashmap, giving the same per-key atomicity
//! contract as a real store: every operation locks its key's shard for the
//! duration of the call. Used as the injected fake in tests and as a
//! zero-setup backend for local development.

use std::collections::BTreeSet;

use dashmap::DashMap;

use parley_types::error::StoreError;

use crate::store::keyed::KeyedStore;

/// Dashmap-backed implementation of `KeyedStore`.
///
/// Sets and lists live in separate maps; a key never collides across the two
/// because the chat layer derives them from disjoint prefixes.
#[derive(Default)]
pub struct MemoryKeyedStore {
    sets: DashMap<String, BTreeSet<String>>,
    lists: DashMap<String, Vec<String>>,
}

impl MemoryKeyedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolve an inclusive `(start, stop)` window against a list of `len`
/// elements, Redis-style: negative indices count from the end, and the
/// window is clamped to the list bounds. `None` means an empty window.
fn resolve_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = len as i64;
    if len == 0 {
        return None;
    }
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
    if start > stop || start >= len || stop < 0 {
        return None;
    }
    Some((start as usize, stop as usize))
}

impl KeyedStore for MemoryKeyedStore {
    async fn set_add(&self, key: &str, member: &str) -> Result<(), StoreError> {
        self.sets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<(), StoreError> {
        if let Some(mut members) = self.sets.get_mut(key) {
            members.remove(member);
        }
        Ok(())
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .sets
            .get(key)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn list_push_front(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lists
            .entry(key.to_string())
            .or_default()
            .insert(0, value.to_string());
        Ok(())
    }

    async fn list_trim(&self, key: &str, start: i64, stop: i64) -> Result<(), StoreError> {
        if let Some(mut list) = self.lists.get_mut(key) {
            match resolve_range(list.len(), start, stop) {
                Some((lo, hi)) => {
                    list.truncate(hi + 1);
                    list.drain(..lo);
                }
                None => list.clear(),
            }
        }
        Ok(())
    }

    async fn list_range(&self, key: &str, start: i64, stop: i64) -> Result<Vec<String>, StoreError> {
        Ok(self
            .lists
            .get(key)
            .and_then(|list| {
                resolve_range(list.len(), start, stop).map(|(lo, hi)| list.value()[lo..=hi].to_vec())
            })
            .unwrap_or_default())
    }

    async fn list_delete(&self, key: &str) -> Result<(), StoreError> {
        self.lists.remove(key);
        Ok(())
    }
}
