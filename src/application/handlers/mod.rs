//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod shopping;

pub use shopping::{
    GetCurrentShoppingListHandler, GetCurrentShoppingListQuery, GetRegisteredItemsHandler,
    GetRegisteredItemsQuery, RecordShoppingListCommand, RecordShoppingListHandler,
};
