//! Shopping command and query handlers.

mod get_current_shopping_list;
mod get_registered_items;
mod record_shopping_list;

pub use get_current_shopping_list::{GetCurrentShoppingListHandler, GetCurrentShoppingListQuery};
pub use get_registered_items::{GetRegisteredItemsHandler, GetRegisteredItemsQuery};
pub use record_shopping_list::{RecordShoppingListCommand, RecordShoppingListHandler};
