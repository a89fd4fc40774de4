//! Shared domain types for Parley.
//!
//! This crate contains the types used across the Parley chat backend:
//! messages, log entries, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod error;
pub mod message;
