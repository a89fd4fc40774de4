//! HTTP/REST API layer for Parley.
//!
//! Axum-based API at `/api/chat` with query-dispatched operations, flat
//! `{"error": ...}` failure bodies, and CORS support.

pub mod error;
pub mod handlers;
pub mod router;
