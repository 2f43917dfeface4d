//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }
}

/// How a failure should be treated by whoever reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Expected and user-correctable; safe to report verbatim.
    Validation,
    /// Internal or collaborator failure.
    Unexpected,
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Shopping list validation
    ItemsEmpty,
    ItemNameEmpty,
    ItemQuantityTooLong,
    ItemPriceNegative,

    // Infrastructure errors
    RepositoryFailure,
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ItemsEmpty => "ShoppingList.Items.Empty",
            ErrorCode::ItemNameEmpty => "ShoppingList.Items.Name.Empty",
            ErrorCode::ItemQuantityTooLong => "ShoppingList.Items.Quantity.TooLong",
            ErrorCode::ItemPriceNegative => "ShoppingList.Items.Price.Negative",
            ErrorCode::RepositoryFailure => "Repository.Failure",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standard domain error with code, description, kind and optional details.
///
/// The `cause` is kept for logging only and is never meant to cross the
/// transport boundary.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub description: String,
    pub kind: ErrorKind,
    pub cause: Option<Arc<dyn Error + Send + Sync>>,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error without a cause.
    pub fn new(code: ErrorCode, description: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            code,
            description: description.into(),
            kind,
            cause: None,
            details: HashMap::new(),
        }
    }

    /// Creates a validation error.
    pub fn validation(code: ErrorCode, description: impl Into<String>) -> Self {
        Self::new(code, description, ErrorKind::Validation)
    }

    /// Creates an unexpected error wrapping the underlying failure.
    pub fn unexpected<E>(code: ErrorCode, description: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            cause: Some(Arc::new(cause)),
            ..Self::new(code, description, ErrorKind::Unexpected)
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }
}

impl PartialEq for DomainError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.description == other.description
            && self.kind == other.kind
            && self.details == other.details
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)
    }
}

impl Error for DomainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("disk on fire")]
    struct DiskOnFire;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("user_id");
        assert_eq!(format!("{}", err), "Field 'user_id' cannot be empty");
    }

    #[test]
    fn domain_error_displays_code_and_description() {
        let err = DomainError::validation(ErrorCode::ItemsEmpty, "Nothing to record");
        assert_eq!(format!("{}", err), "[ShoppingList.Items.Empty] Nothing to record");
    }

    #[test]
    fn validation_constructor_sets_kind() {
        let err = DomainError::validation(ErrorCode::ItemNameEmpty, "x");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.is_validation());
        assert!(err.cause.is_none());
    }

    #[test]
    fn unexpected_keeps_cause_as_source() {
        let err = DomainError::unexpected(ErrorCode::RepositoryFailure, "Storage failed", DiskOnFire);
        assert_eq!(err.kind, ErrorKind::Unexpected);
        let source = err.source().expect("cause should be exposed as source");
        assert_eq!(source.to_string(), "disk on fire");
    }

    #[test]
    fn with_detail_adds_detail() {
        let err = DomainError::validation(ErrorCode::ItemPriceNegative, "Negative")
            .with_detail("index", "3");
        assert_eq!(err.details.get("index"), Some(&"3".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(
            format!("{}", ErrorCode::ItemQuantityTooLong),
            "ShoppingList.Items.Quantity.TooLong"
        );
        assert_eq!(format!("{}", ErrorCode::RepositoryFailure), "Repository.Failure");
    }
}
