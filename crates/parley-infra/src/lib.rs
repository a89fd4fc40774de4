//! Infrastructure layer for Parley.
//!
//! Contains the durable implementation of the `KeyedStore` trait defined in
//! `parley-core`: SQLite with WAL mode and split read/write connection pools.

pub mod sqlite;
