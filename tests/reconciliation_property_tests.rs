//! Property-based tests for catalog reconciliation.
//!
//! Properties:
//! - name normalization is idempotent and never produces empty segments
//! - `intersecting` and `without` partition a list against any catalog
//! - recording a valid list leaves every purchased product in the catalog

use std::sync::Arc;

use proptest::prelude::*;
use tokio_util::sync::CancellationToken;

use shopping_list::adapters::memory::InMemoryShoppingStore;
use shopping_list::application::{RecordShoppingListCommand, RecordShoppingListHandler};
use shopping_list::domain::foundation::UserId;
use shopping_list::domain::shopping::{
    normalize, validate_shopping_list, RegisteredItem, ShoppingItem, ShoppingList,
};

/// Product names with irregular spacing and casing, e.g. "  sweet   Potato "
fn name_strategy() -> impl Strategy<Value = String> {
    r"[ ]{0,2}[a-zA-Z]{1,8}([ ]{1,3}[a-zA-Z]{1,8}){0,2}[ ]{0,2}"
}

fn item_strategy() -> impl Strategy<Value = ShoppingItem> {
    (
        name_strategy(),
        proptest::option::of(r"[0-9]{1,3}(kg|g|L)?"),
        proptest::option::of(0.01f32..500.0f32),
        any::<bool>(),
    )
        .prop_map(|(name, quantity, price, checked)| {
            ShoppingItem::new(name, quantity, price, checked)
        })
}

fn list_strategy() -> impl Strategy<Value = ShoppingList> {
    (
        proptest::option::of(r"[A-Za-z ]{0,12}"),
        prop::collection::vec(item_strategy(), 1..12),
    )
        .prop_map(|(name, items)| ShoppingList::new(name, items))
}

fn catalog_strategy() -> impl Strategy<Value = Vec<RegisteredItem>> {
    prop::collection::vec(
        name_strategy().prop_map(|name| RegisteredItem::new(name, None, None)),
        0..8,
    )
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(name in name_strategy()) {
        let once = normalize(&name);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn prop_normalized_names_have_no_blank_segments(name in name_strategy()) {
        let normalized = normalize(&name);
        prop_assert!(!normalized.starts_with('-'));
        prop_assert!(!normalized.ends_with('-'));
        prop_assert!(!normalized.contains("--"));
        prop_assert!(!normalized.chars().any(char::is_whitespace));
        prop_assert_eq!(normalized.to_uppercase(), normalized.clone());
    }

    #[test]
    fn prop_intersecting_and_without_partition_the_list(
        list in list_strategy(),
        catalog in catalog_strategy(),
    ) {
        let known = list.intersecting(&catalog);
        let unknown = list.without(&catalog);

        prop_assert_eq!(known.len() + unknown.len(), list.len());
        for item in known.iter() {
            prop_assert!(catalog.iter().any(|c| c.normalized_name() == item.normalized_name()));
        }
        for item in unknown.iter() {
            prop_assert!(catalog.iter().all(|c| c.normalized_name() != item.normalized_name()));
        }
    }

    #[test]
    fn prop_empty_catalog_knows_nothing(list in list_strategy()) {
        let catalog: Vec<RegisteredItem> = Vec::new();
        prop_assert!(list.intersecting(&catalog).is_empty());
        let remaining = list.without(&catalog);
        prop_assert_eq!(remaining.items(), list.items());
    }

    #[test]
    fn prop_generated_lists_pass_validation(list in list_strategy()) {
        prop_assert!(validate_shopping_list(&list).is_empty());
    }

    #[test]
    fn prop_recorded_products_end_up_in_catalog(
        list in list_strategy(),
        catalog in catalog_strategy(),
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let user = UserId::new("prop-user").unwrap();
            let store = Arc::new(
                InMemoryShoppingStore::new().with_registered_items(user.clone(), catalog.clone()),
            );
            let handler = RecordShoppingListHandler::new(store.clone());

            let outcome = handler
                .handle(
                    RecordShoppingListCommand {
                        user_id: user.clone(),
                        shopping_list: list.clone(),
                    },
                    &CancellationToken::new(),
                )
                .await
                .unwrap();
            prop_assert!(outcome.is_success());

            let updated = store.registered_items(&user);
            for item in list.iter() {
                prop_assert!(updated.iter().any(|c| c.normalized_name() == item.normalized_name()));
            }
            for entry in &catalog {
                prop_assert!(updated.iter().any(|c| c.normalized_name() == entry.normalized_name()));
            }
            prop_assert_eq!(store.history(&user).len(), usize::from(list.is_named()));
            Ok(())
        })?;
    }
}
