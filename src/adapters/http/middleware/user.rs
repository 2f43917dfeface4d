//! Caller identity extractor.
//!
//! Authentication is not in place yet: the caller may name itself with the
//! `X-User-Id` header, otherwise every request acts as the default user.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::shopping::dto::ErrorResponse;
use crate::domain::foundation::UserId;

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor yielding the acting user.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

/// Rejection for a present but unusable `X-User-Id` header.
#[derive(Debug)]
pub struct InvalidUserHeader;

impl IntoResponse for InvalidUserHeader {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::single("User.Invalid", "Invalid X-User-Id header")),
        )
            .into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = InvalidUserHeader;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.headers.get(USER_ID_HEADER) {
            None => Ok(CurrentUser(UserId::default_user())),
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|v| UserId::new(v).ok())
                .map(CurrentUser)
                .ok_or(InvalidUserHeader),
        }
    }
}
