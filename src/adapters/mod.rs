//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum REST surface
//! - `memory` - in-memory store for development and tests
//! - `postgres` - PostgreSQL store
//! - `pending` - per-session staged writes used by both stores

pub mod http;
pub mod memory;
pub mod pending;
pub mod postgres;
