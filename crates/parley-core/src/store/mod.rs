//! Keyed store trait and the in-memory implementation.

pub mod keyed;
pub mod memory;

pub use keyed::KeyedStore;
pub use memory::MemoryKeyedStore;
