//! HTTP routes for shopping endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_current_shopping_list, get_registered_products, record_shopping_list, ShoppingHandlers,
};

/// Creates the shopping router with all endpoints.
pub fn shopping_routes(handlers: ShoppingHandlers) -> Router {
    Router::new()
        .route("/registered-products", get(get_registered_products))
        .route("/current", get(get_current_shopping_list))
        .route("/record", post(record_shopping_list))
        .with_state(handlers)
}
