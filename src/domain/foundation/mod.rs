//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the timestamp value object, error types and the
//! `Outcome` envelope that form the vocabulary of the shopping domain.

mod errors;
mod ids;
mod outcome;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ErrorKind, ValidationError};
pub use ids::UserId;
pub use outcome::{DomainErrors, InvalidOutcomeAccess, Outcome};
pub use timestamp::Timestamp;
