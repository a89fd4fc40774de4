//! SQLite storage layer.
//!
//! The keyed store implementation backed by SQLite with WAL mode and split
//! read/write connection pools.

pub mod keyed;
pub mod pool;

pub use keyed::SqliteKeyedStore;
pub use pool::DatabasePool;
