//! HTTP adapters - REST API implementations.
//!
//! The shopping endpoints are nested under `/api/shopping`; `/health` sits at
//! the root. Tracing, CORS and a request timeout wrap the whole router.

pub mod middleware;
pub mod shopping;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

pub use shopping::{shopping_routes, ShoppingHandlers};

/// Builds the application router.
pub fn app_router(handlers: ShoppingHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(shopping::health))
        .nest("/api/shopping", shopping_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
}

/// Allows any origin unless origins are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
