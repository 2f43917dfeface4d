//! Shopping repository port (current list and purchase history).

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::shopping::ShoppingList;

use super::RepositoryError;

/// Repository port for a user's shopping lists.
#[async_trait]
pub trait ShoppingRepository: Send + Sync {
    /// Returns the user's current list, or `None` if none was stored.
    async fn get_current_shopping_list(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ShoppingList>, RepositoryError>;

    /// Stages archiving of a list into the user's shopping history.
    async fn record_shopping_list(
        &self,
        user_id: &UserId,
        shopping_list: &ShoppingList,
    ) -> Result<(), RepositoryError>;
}
