//! RecordShoppingListHandler - Command handler for checking out a list.
//!
//! Reconciles the submitted list against the user's registered catalog:
//! known items are updated, unknown items are registered, and a named list is
//! archived into history. Everything is committed once at the end.
//!
//! Each invocation stages its writes in a fresh [`StorageScope`]. A failed or
//! cancelled invocation drops its scope, so nothing it staged is committed.
//! Nothing guards the catalog read against concurrent submissions by the same
//! user.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::application::cancellation::{cancellable, Cancelled};
use crate::domain::foundation::{DomainError, DomainErrors, ErrorCode, Outcome, UserId};
use crate::domain::shopping::{validate_shopping_list, ShoppingList};
use crate::ports::{RepositoryError, StorageScope, UnitOfWorkFactory};

/// Command to record a checked-out shopping list.
#[derive(Debug, Clone)]
pub struct RecordShoppingListCommand {
    pub user_id: UserId,
    pub shopping_list: ShoppingList,
}

/// Handler for recording shopping lists.
pub struct RecordShoppingListHandler {
    scopes: Arc<dyn UnitOfWorkFactory>,
}

impl RecordShoppingListHandler {
    pub fn new(scopes: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { scopes }
    }

    #[tracing::instrument(
        name = "record_shopping_list",
        skip_all,
        fields(user_id = %cmd.user_id, items = cmd.shopping_list.len())
    )]
    pub async fn handle(
        &self,
        cmd: RecordShoppingListCommand,
        cancel: &CancellationToken,
    ) -> Result<Outcome<()>, Cancelled> {
        let RecordShoppingListCommand {
            user_id,
            shopping_list,
        } = cmd;

        // 1. Validate before any side effect
        if let Some(errors) = DomainErrors::from_vec(validate_shopping_list(&shopping_list)) {
            debug!(errors = errors.len(), "Shopping list rejected by validation");
            return Ok(Outcome::fail(errors));
        }

        let StorageScope {
            products,
            shopping,
            unit_of_work,
        } = self.scopes.begin();

        // 2. Load the catalog
        let catalog = match cancellable(cancel, products.get_registered_items(&user_id)).await? {
            Ok(catalog) => catalog,
            Err(e) => return Ok(storage_failure("load registered items", e)),
        };

        // 3. Known items
        let known = shopping_list.intersecting(&catalog);
        if !known.is_empty() {
            let updated = cancellable(cancel, products.update_items(&user_id, known.items())).await?;
            if let Err(e) = updated {
                return Ok(storage_failure("update registered items", e));
            }
        }

        // 4. New items
        let unknown = shopping_list.without(&catalog);
        if !unknown.is_empty() {
            let registered =
                cancellable(cancel, products.register_items(&user_id, unknown.items())).await?;
            if let Err(e) = registered {
                return Ok(storage_failure("register new items", e));
            }
        }

        // 5. Archive the original list when named
        if shopping_list.is_named() {
            let recorded = cancellable(
                cancel,
                shopping.record_shopping_list(&user_id, &shopping_list),
            )
            .await?;
            if let Err(e) = recorded {
                return Ok(storage_failure("record shopping list", e));
            }
        }

        // 6. Single commit
        let affected = match cancellable(cancel, unit_of_work.save_changes()).await? {
            Ok(affected) => affected,
            Err(e) => return Ok(storage_failure("save changes", e)),
        };

        info!(
            updated = known.len(),
            registered = unknown.len(),
            archived = shopping_list.is_named(),
            affected,
            "Shopping list recorded"
        );

        Ok(Outcome::ok(()))
    }
}

fn storage_failure(step: &str, error: RepositoryError) -> Outcome<()> {
    warn!(step, error = %error, "Storage collaborator failed");
    Outcome::fail(DomainError::unexpected(
        ErrorCode::RepositoryFailure,
        format!("Failed to {}.", step),
        error,
    ))
}
