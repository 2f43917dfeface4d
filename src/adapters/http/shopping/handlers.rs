//! HTTP handlers for shopping endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio_util::sync::CancellationToken;

use crate::adapters::http::middleware::CurrentUser;
use crate::application::handlers::shopping::{
    GetCurrentShoppingListHandler, GetCurrentShoppingListQuery, GetRegisteredItemsHandler,
    GetRegisteredItemsQuery, RecordShoppingListCommand, RecordShoppingListHandler,
};
use crate::application::Cancelled;
use crate::domain::foundation::{DomainErrors, Outcome};
use crate::ports::UnitOfWorkFactory;

use super::dto::{
    CurrentShoppingListResponse, ErrorResponse, ProductDto, RecordShoppingListRequest,
    RegisteredProductsResponse, ShoppingListDto,
};

/// Non-standard status used when the client went away before completion.
const CLIENT_CLOSED_REQUEST: u16 = 499;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ShoppingHandlers {
    record_handler: Arc<RecordShoppingListHandler>,
    current_handler: Arc<GetCurrentShoppingListHandler>,
    registered_handler: Arc<GetRegisteredItemsHandler>,
}

impl ShoppingHandlers {
    pub fn new(
        record_handler: Arc<RecordShoppingListHandler>,
        current_handler: Arc<GetCurrentShoppingListHandler>,
        registered_handler: Arc<GetRegisteredItemsHandler>,
    ) -> Self {
        Self {
            record_handler,
            current_handler,
            registered_handler,
        }
    }

    /// Wires every handler to one store.
    ///
    /// Each record request opens its own staging scope. Queries never stage
    /// writes, so they share a single scope for the life of the router.
    pub fn for_store<S>(store: Arc<S>) -> Self
    where
        S: UnitOfWorkFactory + 'static,
    {
        let reads = store.begin();

        Self::new(
            Arc::new(RecordShoppingListHandler::new(store)),
            Arc::new(GetCurrentShoppingListHandler::new(reads.shopping)),
            Arc::new(GetRegisteredItemsHandler::new(reads.products)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/shopping/registered-products - The user's product catalog
pub async fn get_registered_products(
    State(handlers): State<ShoppingHandlers>,
    CurrentUser(user_id): CurrentUser,
) -> Response {
    // Dropping the handler future (client disconnect) cancels the token.
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let query = GetRegisteredItemsQuery { user_id };
    match handlers.registered_handler.handle(query, &cancel).await {
        Ok(Outcome::Success(items)) => {
            let response = RegisteredProductsResponse {
                products: items.iter().map(ProductDto::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(Outcome::Failure(errors)) => handle_domain_errors(&errors),
        Err(cancelled) => handle_cancelled(cancelled),
    }
}

/// GET /api/shopping/current - The user's working list
pub async fn get_current_shopping_list(
    State(handlers): State<ShoppingHandlers>,
    CurrentUser(user_id): CurrentUser,
) -> Response {
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let query = GetCurrentShoppingListQuery { user_id };
    match handlers.current_handler.handle(query, &cancel).await {
        Ok(Outcome::Success(list)) => {
            let response = CurrentShoppingListResponse {
                shopping_list: ShoppingListDto::from(&list),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(Outcome::Failure(errors)) => handle_domain_errors(&errors),
        Err(cancelled) => handle_cancelled(cancelled),
    }
}

/// POST /api/shopping/record - Reconcile a checked-out list into the catalog
pub async fn record_shopping_list(
    State(handlers): State<ShoppingHandlers>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<RecordShoppingListRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return handle_rejected_body(rejection),
    };

    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let cmd = RecordShoppingListCommand {
        user_id,
        shopping_list: req.shopping_list.into(),
    };
    match handlers.record_handler.handle(cmd, &cancel).await {
        Ok(Outcome::Success(())) => StatusCode::NO_CONTENT.into_response(),
        Ok(Outcome::Failure(errors)) => handle_domain_errors(&errors),
        Err(cancelled) => handle_cancelled(cancelled),
    }
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

/// The first error decides the status: validation is the caller's fault,
/// anything else is ours.
fn handle_domain_errors(errors: &DomainErrors) -> Response {
    let status = if errors.first().is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!(code = %errors.first().code, "Request failed: {}", errors.first());
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ErrorResponse::from(errors))).into_response()
}

/// Unreadable bodies keep axum's status but use the common error shape.
fn handle_rejected_body(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "Request body rejected");
    (
        rejection.status(),
        Json(ErrorResponse::single("Request.Invalid", rejection.body_text())),
    )
        .into_response()
}

fn handle_cancelled(cancelled: Cancelled) -> Response {
    tracing::debug!("{}", cancelled);
    let status =
        StatusCode::from_u16(CLIENT_CLOSED_REQUEST).unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
    (
        status,
        Json(ErrorResponse::single("Request.Cancelled", cancelled.to_string())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, ErrorKind};

    #[test]
    fn validation_failure_is_bad_request() {
        let errors: DomainErrors =
            DomainError::validation(ErrorCode::ItemsEmpty, "Shopping list must contain at least one item.")
                .into();
        assert_eq!(handle_domain_errors(&errors).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unexpected_failure_is_internal_error() {
        let errors: DomainErrors =
            DomainError::new(ErrorCode::RepositoryFailure, "Storage unavailable", ErrorKind::Unexpected)
                .into();
        assert_eq!(
            handle_domain_errors(&errors).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn malformed_body_uses_the_error_envelope() {
        let rejection = Json::<RecordShoppingListRequest>::from_bytes(b"{\"shopping_list\": ")
            .err()
            .unwrap();
        let status = rejection.status();

        let response = handle_rejected_body(rejection);

        assert_eq!(response.status(), status);
        assert!(response.status().is_client_error());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["errors"][0]["code"], "Request.Invalid");
        assert!(body["errors"][0]["description"].as_str().is_some());
    }

    #[test]
    fn cancellation_is_client_closed_request() {
        assert_eq!(handle_cancelled(Cancelled).status().as_u16(), 499);
    }
}
