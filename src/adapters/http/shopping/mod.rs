//! HTTP adapter for shopping endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use dto::{
    CurrentShoppingListResponse, ErrorEntry, ErrorResponse, ProductDto,
    RecordShoppingListRequest, RegisteredProductsResponse, ShoppingListDto, PRICE_EPSILON,
};
pub use handlers::{health, ShoppingHandlers};
pub use routes::shopping_routes;
