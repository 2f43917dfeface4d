//! Unit of work port - the single commit point for staged writes.

use std::sync::Arc;

use async_trait::async_trait;

use super::{ProductRepository, RepositoryError, ShoppingRepository};

/// Commits every change staged through the repository ports of its scope.
///
/// Implementations decide how atomic the commit is; callers get no
/// rollback for repository calls that already completed.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Applies staged changes, returning the number of affected records.
    async fn save_changes(&self) -> Result<u64, RepositoryError>;
}

/// Repositories and the unit of work bound to one staging scope.
///
/// Writes staged through `products` or `shopping` are only visible to this
/// scope's `unit_of_work`. Dropping the scope without committing discards
/// them.
#[derive(Clone)]
pub struct StorageScope {
    pub products: Arc<dyn ProductRepository>,
    pub shopping: Arc<dyn ShoppingRepository>,
    pub unit_of_work: Arc<dyn UnitOfWork>,
}

/// Opens staging scopes over a shared store.
pub trait UnitOfWorkFactory: Send + Sync {
    /// Starts a scope with nothing staged.
    fn begin(&self) -> StorageScope;
}
