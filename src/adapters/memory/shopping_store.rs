//! In-memory shopping store.
//!
//! [`InMemoryShoppingStore`] owns the committed state. Every staging scope is
//! an [`InMemorySession`] with its own [`ChangeSet`], applied under a single
//! write lock on `save_changes`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::adapters::pending::{ChangeSet, PendingChange};
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::shopping::{RegisteredItem, ShoppingItem, ShoppingList};
use crate::ports::{
    ProductRepository, RepositoryError, ShoppingRepository, StorageScope, UnitOfWork,
    UnitOfWorkFactory,
};

/// A list archived into a user's shopping history.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedShoppingList {
    pub shopping_list: ShoppingList,
    pub recorded_at: Timestamp,
}

#[derive(Debug, Default)]
struct StoreState {
    catalogs: HashMap<UserId, Vec<RegisteredItem>>,
    current: HashMap<UserId, ShoppingList>,
    history: HashMap<UserId, Vec<RecordedShoppingList>>,
}

impl StoreState {
    /// Applies one change, returning the number of affected records.
    fn apply(&mut self, change: PendingChange) -> u64 {
        match change {
            PendingChange::UpdateItems { user_id, items } => {
                let catalog = self.catalogs.entry(user_id).or_default();
                items
                    .iter()
                    .filter(|item| refresh(catalog, item))
                    .count() as u64
            }
            PendingChange::RegisterItems { user_id, items } => {
                let catalog = self.catalogs.entry(user_id).or_default();
                for item in &items {
                    if !refresh(catalog, item) {
                        catalog.push(RegisteredItem::from_shopping_item(item));
                    }
                }
                items.len() as u64
            }
            PendingChange::RecordShoppingList {
                user_id,
                shopping_list,
                recorded_at,
            } => {
                let affected = 1 + shopping_list.len() as u64;
                self.history
                    .entry(user_id)
                    .or_default()
                    .push(RecordedShoppingList {
                        shopping_list,
                        recorded_at,
                    });
                affected
            }
        }
    }
}

/// Refreshes the catalog entry matching `item`; false when there is none.
fn refresh(catalog: &mut [RegisteredItem], item: &ShoppingItem) -> bool {
    match catalog
        .iter_mut()
        .find(|entry| entry.normalized_name() == item.normalized_name())
    {
        Some(entry) => {
            *entry = entry.refreshed_with(item);
            true
        }
        None => false,
    }
}

/// Committed state shared by every session.
///
/// Used when no database is configured and as the store behind the HTTP
/// integration tests.
#[derive(Debug, Default)]
pub struct InMemoryShoppingStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryShoppingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: seed a user's registered catalog.
    pub fn with_registered_items(self, user_id: UserId, items: Vec<RegisteredItem>) -> Self {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .catalogs
            .insert(user_id, items);
        self
    }

    /// Opens a session with nothing staged.
    pub fn session(&self) -> InMemorySession {
        InMemorySession {
            state: Arc::clone(&self.state),
            changes: ChangeSet::new(),
        }
    }

    /// Replaces the user's current shopping list.
    pub fn set_current_shopping_list(&self, user_id: UserId, shopping_list: ShoppingList) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .current
            .insert(user_id, shopping_list);
    }

    /// Committed catalog of a user.
    pub fn registered_items(&self, user_id: &UserId) -> Vec<RegisteredItem> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .catalogs
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Committed shopping history of a user, oldest first.
    pub fn history(&self, user_id: &UserId) -> Vec<RecordedShoppingList> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .history
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl UnitOfWorkFactory for InMemoryShoppingStore {
    fn begin(&self) -> StorageScope {
        let session = Arc::new(self.session());
        StorageScope {
            products: session.clone(),
            shopping: session.clone(),
            unit_of_work: session,
        }
    }
}

/// One staging scope over an [`InMemoryShoppingStore`].
///
/// Reads see committed state only. Dropping the session discards whatever
/// it staged.
#[derive(Debug)]
pub struct InMemorySession {
    state: Arc<RwLock<StoreState>>,
    changes: ChangeSet,
}

impl InMemorySession {
    /// Number of staged, uncommitted changes.
    pub fn pending_changes(&self) -> usize {
        self.changes.len()
    }
}

#[async_trait]
impl ProductRepository for InMemorySession {
    async fn get_registered_items(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RegisteredItem>, RepositoryError> {
        Ok(self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .catalogs
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_items(
        &self,
        user_id: &UserId,
        items: &[ShoppingItem],
    ) -> Result<(), RepositoryError> {
        self.changes.stage(PendingChange::UpdateItems {
            user_id: user_id.clone(),
            items: items.to_vec(),
        });
        Ok(())
    }

    async fn register_items(
        &self,
        user_id: &UserId,
        items: &[ShoppingItem],
    ) -> Result<(), RepositoryError> {
        self.changes.stage(PendingChange::RegisterItems {
            user_id: user_id.clone(),
            items: items.to_vec(),
        });
        Ok(())
    }
}

#[async_trait]
impl ShoppingRepository for InMemorySession {
    async fn get_current_shopping_list(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ShoppingList>, RepositoryError> {
        Ok(self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .current
            .get(user_id)
            .cloned())
    }

    async fn record_shopping_list(
        &self,
        user_id: &UserId,
        shopping_list: &ShoppingList,
    ) -> Result<(), RepositoryError> {
        self.changes.stage(PendingChange::RecordShoppingList {
            user_id: user_id.clone(),
            shopping_list: shopping_list.clone(),
            recorded_at: Timestamp::now(),
        });
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for InMemorySession {
    async fn save_changes(&self) -> Result<u64, RepositoryError> {
        let changes = self.changes.take();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let affected: u64 = changes.into_iter().map(|change| state.apply(change)).sum();
        tracing::debug!(affected, "In-memory session committed");
        Ok(affected)
    }
}
