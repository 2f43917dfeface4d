//! Shopping domain: items, lists, the matching key and list validation.

mod item;
mod normalize;
mod shopping_list;
mod validation;

pub use item::{Item, RegisteredItem, ShoppingItem};
pub use normalize::normalize;
pub use shopping_list::ShoppingList;
pub use validation::{validate_shopping_list, MAX_QUANTITY_LENGTH};
