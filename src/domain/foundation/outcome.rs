//! Success/failure envelope returned by every use case.
//!
//! An `Outcome` is either `Success(value)` or `Failure(errors)` where the
//! error collection is guaranteed non-empty. Expected failures (validation)
//! and wrapped collaborator failures both travel through this type; use cases
//! never panic or return `Err` for them.

use std::slice;

use thiserror::Error;

use super::DomainError;

/// Raised when the value of a failed outcome is read.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("The value of a failure outcome can not be accessed")]
pub struct InvalidOutcomeAccess;

/// Ordered, non-empty collection of domain errors.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainErrors(Vec<DomainError>);

impl DomainErrors {
    /// Builds the collection, returning `None` when `errors` is empty.
    pub fn from_vec(errors: Vec<DomainError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// The first error; always present.
    pub fn first(&self) -> &DomainError {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[DomainError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, DomainError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<DomainError> {
        self.0
    }
}

impl From<DomainError> for DomainErrors {
    fn from(error: DomainError) -> Self {
        Self(vec![error])
    }
}

impl<'a> IntoIterator for &'a DomainErrors {
    type Item = &'a DomainError;
    type IntoIter = slice::Iter<'a, DomainError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Result of a use-case invocation.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Success(T),
    Failure(DomainErrors),
}

impl<T> Outcome<T> {
    /// Wraps a value in a successful outcome.
    pub fn ok(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wraps one error (or an existing error collection) in a failure.
    pub fn fail(errors: impl Into<DomainErrors>) -> Self {
        Outcome::Failure(errors.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Errors of a failure; empty for a success.
    pub fn errors(&self) -> &[DomainError] {
        match self {
            Outcome::Success(_) => &[],
            Outcome::Failure(errors) => errors.as_slice(),
        }
    }

    /// Borrows the success value.
    ///
    /// Callers must check [`Outcome::is_success`] first; reading the value of
    /// a failure is a contract violation.
    pub fn value(&self) -> Result<&T, InvalidOutcomeAccess> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(InvalidOutcomeAccess),
        }
    }

    /// Consumes the outcome, returning the success value.
    pub fn into_value(self) -> Result<T, InvalidOutcomeAccess> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(InvalidOutcomeAccess),
        }
    }

    /// Converts into a plain `Result` for boundary code.
    pub fn into_result(self) -> Result<T, DomainErrors> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(errors) => Err(errors),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(errors) => Outcome::Failure(errors),
        }
    }
}

impl<T> From<DomainError> for Outcome<T> {
    fn from(error: DomainError) -> Self {
        Outcome::Failure(error.into())
    }
}

impl<T> From<DomainErrors> for Outcome<T> {
    fn from(errors: DomainErrors) -> Self {
        Outcome::Failure(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn error(code: ErrorCode) -> DomainError {
        DomainError::validation(code, "broken")
    }

    #[test]
    fn ok_is_success_with_no_errors() {
        let outcome = Outcome::ok(42);
        assert!(outcome.is_success());
        assert!(outcome.errors().is_empty());
        assert_eq!(outcome.value(), Ok(&42));
    }

    #[test]
    fn single_error_converts_into_failure() {
        let outcome: Outcome<u32> = error(ErrorCode::ItemsEmpty).into();
        assert!(outcome.is_failure());
        assert_eq!(outcome.errors().len(), 1);
        assert_eq!(outcome.errors()[0].code, ErrorCode::ItemsEmpty);
    }

    #[test]
    fn reading_value_of_failure_is_invalid_state() {
        let outcome: Outcome<u32> = Outcome::fail(error(ErrorCode::ItemsEmpty));
        assert_eq!(outcome.value(), Err(InvalidOutcomeAccess));
        assert_eq!(outcome.into_value(), Err(InvalidOutcomeAccess));
    }

    #[test]
    fn empty_error_vec_is_not_a_failure() {
        assert!(DomainErrors::from_vec(vec![]).is_none());
    }

    #[test]
    fn error_collection_keeps_order() {
        let errors = DomainErrors::from_vec(vec![
            error(ErrorCode::ItemNameEmpty),
            error(ErrorCode::ItemPriceNegative),
        ])
        .unwrap();
        let outcome: Outcome<()> = errors.into();

        let codes: Vec<_> = outcome.errors().iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![ErrorCode::ItemNameEmpty, ErrorCode::ItemPriceNegative]);
    }

    #[test]
    fn map_preserves_failure() {
        let outcome: Outcome<u32> = Outcome::fail(error(ErrorCode::ItemsEmpty));
        let mapped = outcome.map(|v| v * 2);
        assert!(mapped.is_failure());

        assert_eq!(Outcome::ok(2).map(|v| v * 2), Outcome::ok(4));
    }

    #[test]
    fn into_result_exposes_first_error() {
        let outcome: Outcome<()> = Outcome::fail(error(ErrorCode::ItemQuantityTooLong));
        let errors = outcome.into_result().unwrap_err();
        assert_eq!(errors.first().code, ErrorCode::ItemQuantityTooLong);
    }
}
