//! HTTP middleware for axum.
//!
//! - `user` - Caller identity extractor

pub mod user;

pub use user::{CurrentUser, InvalidUserHeader, USER_ID_HEADER};
