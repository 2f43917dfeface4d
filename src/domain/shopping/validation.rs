//! Structural checks applied to a submitted list before reconciliation.
//!
//! Every rule runs; violations are collected rather than short-circuited.
//! Errors come out grouped by rule (in declaration order), then by item index.

use crate::domain::foundation::{DomainError, ErrorCode};

use super::{ShoppingItem, ShoppingList};

/// Longest accepted quantity, in characters.
pub const MAX_QUANTITY_LENGTH: usize = 50;

type ItemRule = fn(&ShoppingItem) -> Option<DomainError>;

const ITEM_RULES: [ItemRule; 3] = [name_not_empty, quantity_not_too_long, price_not_negative];

/// Validates a submitted list, returning every violation found.
pub fn validate_shopping_list(list: &ShoppingList) -> Vec<DomainError> {
    let mut errors = Vec::new();

    if list.is_empty() {
        errors.push(DomainError::validation(
            ErrorCode::ItemsEmpty,
            "Shopping list must contain at least one item.",
        ));
    }

    for rule in ITEM_RULES {
        errors.extend(list.iter().enumerate().filter_map(|(index, item)| {
            rule(item).map(|error| error.with_detail("index", index.to_string()))
        }));
    }

    errors
}

fn name_not_empty(item: &ShoppingItem) -> Option<DomainError> {
    item.name().trim().is_empty().then(|| {
        DomainError::validation(ErrorCode::ItemNameEmpty, "Item name must not be empty.")
    })
}

fn quantity_not_too_long(item: &ShoppingItem) -> Option<DomainError> {
    let too_long = item
        .quantity()
        .is_some_and(|quantity| quantity.chars().count() > MAX_QUANTITY_LENGTH);
    too_long.then(|| {
        DomainError::validation(
            ErrorCode::ItemQuantityTooLong,
            format!("Item quantity must not exceed {} characters.", MAX_QUANTITY_LENGTH),
        )
    })
}

fn price_not_negative(item: &ShoppingItem) -> Option<DomainError> {
    let invalid = item
        .price()
        .is_some_and(|price| price.is_nan() || price < 0.0);
    invalid.then(|| {
        DomainError::validation(
            ErrorCode::ItemPriceNegative,
            "Item price must be a non-negative number.",
        )
    })
}
