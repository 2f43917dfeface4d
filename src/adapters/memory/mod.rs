//! In-memory adapters - Storage ports backed by process memory.

mod shopping_store;

pub use shopping_store::{InMemorySession, InMemoryShoppingStore, RecordedShoppingList};
