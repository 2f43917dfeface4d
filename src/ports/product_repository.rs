//! Product repository port (registered-item catalog).
//!
//! Reads are immediate. Writes are staged and only become durable when the
//! [`UnitOfWork`](super::UnitOfWork) commits.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::shopping::{RegisteredItem, ShoppingItem};

use super::RepositoryError;

/// Repository port for the user's catalog of previously bought items.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Loads the user's registered catalog. An empty catalog is not an error.
    async fn get_registered_items(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RegisteredItem>, RepositoryError>;

    /// Stages an update of already-registered items, matched by normalized name.
    async fn update_items(
        &self,
        user_id: &UserId,
        items: &[ShoppingItem],
    ) -> Result<(), RepositoryError>;

    /// Stages registration of items the catalog does not know yet.
    async fn register_items(
        &self,
        user_id: &UserId,
        items: &[ShoppingItem],
    ) -> Result<(), RepositoryError>;
}
