//! GetCurrentShoppingListHandler - Query handler for the user's working list.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::application::cancellation::{cancellable, Cancelled};
use crate::domain::foundation::{DomainError, ErrorCode, Outcome, UserId};
use crate::domain::shopping::ShoppingList;
use crate::ports::ShoppingRepository;

/// Query for the current shopping list of a user.
#[derive(Debug, Clone)]
pub struct GetCurrentShoppingListQuery {
    pub user_id: UserId,
}

/// Handler for retrieving the current list.
///
/// A user without a stored list gets an unnamed empty list, not a failure.
pub struct GetCurrentShoppingListHandler {
    shopping: Arc<dyn ShoppingRepository>,
}

impl GetCurrentShoppingListHandler {
    pub fn new(shopping: Arc<dyn ShoppingRepository>) -> Self {
        Self { shopping }
    }

    #[tracing::instrument(name = "get_current_shopping_list", skip_all, fields(user_id = %query.user_id))]
    pub async fn handle(
        &self,
        query: GetCurrentShoppingListQuery,
        cancel: &CancellationToken,
    ) -> Result<Outcome<ShoppingList>, Cancelled> {
        let stored = cancellable(cancel, self.shopping.get_current_shopping_list(&query.user_id)).await?;

        Ok(match stored {
            Ok(list) => Outcome::ok(list.unwrap_or_else(ShoppingList::empty)),
            Err(e) => {
                warn!(error = %e, "Failed to load current shopping list");
                Outcome::fail(DomainError::unexpected(
                    ErrorCode::RepositoryFailure,
                    "Failed to load current shopping list.",
                    e,
                ))
            }
        })
    }
}
