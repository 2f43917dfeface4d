//! Error type shared by storage ports.

use thiserror::Error;

/// Failure reported by a storage collaborator.
///
/// Handlers never surface this directly; they wrap it into an unexpected
/// `DomainError` so callers only ever see an `Outcome`.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

impl RepositoryError {
    pub fn database(message: impl Into<String>) -> Self {
        RepositoryError::Database(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        RepositoryError::Unavailable(message.into())
    }
}
