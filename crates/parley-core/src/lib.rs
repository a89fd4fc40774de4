//! Chat orchestration and storage trait definitions for Parley.
//!
//! This crate defines the `KeyedStore` "port" that the infrastructure layer
//! implements, and the channel registry, message log, and chat service built
//! on top of it. It depends only on `parley-types` -- never on `parley-infra`
//! or any database/IO crate. The dashmap-backed in-memory store lives here so
//! tests and local development can inject it without infra.

pub mod chat;
pub mod store;
