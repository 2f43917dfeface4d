//! GetRegisteredItemsHandler - Query handler for the user's catalog.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::application::cancellation::{cancellable, Cancelled};
use crate::domain::foundation::{DomainError, ErrorCode, Outcome, UserId};
use crate::domain::shopping::RegisteredItem;
use crate::ports::ProductRepository;

/// Query for the registered catalog of a user.
#[derive(Debug, Clone)]
pub struct GetRegisteredItemsQuery {
    pub user_id: UserId,
}

/// Handler returning the catalog as the repository provides it.
pub struct GetRegisteredItemsHandler {
    products: Arc<dyn ProductRepository>,
}

impl GetRegisteredItemsHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    #[tracing::instrument(name = "get_registered_items", skip_all, fields(user_id = %query.user_id))]
    pub async fn handle(
        &self,
        query: GetRegisteredItemsQuery,
        cancel: &CancellationToken,
    ) -> Result<Outcome<Vec<RegisteredItem>>, Cancelled> {
        let catalog = cancellable(cancel, self.products.get_registered_items(&query.user_id)).await?;

        Ok(match catalog {
            Ok(items) => Outcome::ok(items),
            Err(e) => {
                warn!(error = %e, "Failed to load registered items");
                Outcome::fail(DomainError::unexpected(
                    ErrorCode::RepositoryFailure,
                    "Failed to load registered items.",
                    e,
                ))
            }
        })
    }
}
