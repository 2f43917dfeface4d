//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresShoppingStore` - Pool owner that opens sessions
//! - `PostgresSession` - Catalog, shopping lists and the unit of work for one scope

mod shopping_store;

pub use shopping_store::{PostgresSession, PostgresShoppingStore};
