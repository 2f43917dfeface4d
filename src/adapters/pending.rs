//! Staged writes shared by the storage adapters.
//!
//! Repository writes are queued as `PendingChange`s and only applied when the
//! unit of work commits. Each store session owns one queue, so a session only
//! ever commits what it staged itself.

use std::sync::{Mutex, PoisonError};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::shopping::{ShoppingItem, ShoppingList};

/// A write waiting for the next `save_changes`.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    UpdateItems {
        user_id: UserId,
        items: Vec<ShoppingItem>,
    },
    RegisterItems {
        user_id: UserId,
        items: Vec<ShoppingItem>,
    },
    RecordShoppingList {
        user_id: UserId,
        shopping_list: ShoppingList,
        recorded_at: Timestamp,
    },
}

/// FIFO queue of pending changes.
#[derive(Debug, Default)]
pub struct ChangeSet {
    pending: Mutex<Vec<PendingChange>>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self, change: PendingChange) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(change);
    }

    /// Removes and returns every staged change in staging order.
    pub fn take(&self) -> Vec<PendingChange> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str) -> PendingChange {
        PendingChange::RegisterItems {
            user_id: UserId::new("u").unwrap(),
            items: vec![ShoppingItem::new(name, None, None, false)],
        }
    }

    #[test]
    fn take_drains_in_staging_order() {
        let changes = ChangeSet::new();
        changes.stage(register("a"));
        changes.stage(register("b"));
        assert_eq!(changes.len(), 2);

        assert_eq!(changes.take(), vec![register("a"), register("b")]);
        assert!(changes.is_empty());
    }
}
