//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! Every handler returns `Result<Outcome<T>, Cancelled>`: cancellation is the
//! only `Err`, all other failures are carried by the `Outcome`.

pub mod cancellation;
pub mod handlers;

pub use cancellation::{cancellable, Cancelled};
pub use handlers::{
    GetCurrentShoppingListHandler, GetCurrentShoppingListQuery, GetRegisteredItemsHandler,
    GetRegisteredItemsQuery, RecordShoppingListCommand, RecordShoppingListHandler,
};
