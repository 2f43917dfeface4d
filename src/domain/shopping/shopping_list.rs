//! ShoppingList aggregate and the reconciliation partition.

use std::collections::HashSet;
use std::slice;

use super::{Item, ShoppingItem};

/// A user's list of items, optionally named.
///
/// Never mutated in place: `intersecting` and `without` build new lists that
/// keep the same name. Duplicate items are allowed and pass through as-is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShoppingList {
    name: Option<String>,
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new(name: Option<String>, items: Vec<ShoppingItem>) -> Self {
        Self { name, items }
    }

    /// Unnamed list without items.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True iff the name is present and not blank.
    pub fn is_named(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.trim().is_empty())
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, ShoppingItem> {
        self.items.iter()
    }

    /// Items whose normalized name appears in `catalog`, in list order.
    pub fn intersecting<I: AsRef<Item>>(&self, catalog: &[I]) -> ShoppingList {
        let known = catalog_keys(catalog);
        self.filtered(|item| known.contains(item.normalized_name()))
    }

    /// Items whose normalized name does not appear in `catalog`, in list order.
    pub fn without<I: AsRef<Item>>(&self, catalog: &[I]) -> ShoppingList {
        let known = catalog_keys(catalog);
        self.filtered(|item| !known.contains(item.normalized_name()))
    }

    /// Sum of the prices of checked items, rounded to cents.
    pub fn total(&self) -> f32 {
        let total: f32 = self
            .items
            .iter()
            .filter(|item| item.is_checked())
            .filter_map(ShoppingItem::price)
            .sum();
        (total * 100.0).round() / 100.0
    }

    fn filtered(&self, keep: impl Fn(&ShoppingItem) -> bool) -> ShoppingList {
        ShoppingList {
            name: self.name.clone(),
            items: self.items.iter().filter(|item| keep(item)).cloned().collect(),
        }
    }
}

fn catalog_keys<I: AsRef<Item>>(catalog: &[I]) -> HashSet<&str> {
    catalog
        .iter()
        .map(|entry| entry.as_ref().normalized_name())
        .collect()
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ShoppingItem;
    type IntoIter = slice::Iter<'a, ShoppingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shopping::RegisteredItem;

    fn groceries() -> ShoppingList {
        ShoppingList::new(
            Some("Groceries".to_string()),
            vec![
                ShoppingItem::new("Milk", None, Some(1.5), false),
                ShoppingItem::new("Bread", None, Some(2.5), false),
                ShoppingItem::new("Eggs", None, Some(12.5), false),
            ],
        )
    }

    fn catalog() -> Vec<RegisteredItem> {
        vec![
            RegisteredItem::new("Milk", None, Some(2.0)),
            RegisteredItem::new("Watermelon", None, Some(10.0)),
        ]
    }

    fn names(list: &ShoppingList) -> Vec<&str> {
        list.iter().map(ShoppingItem::normalized_name).collect()
    }

    #[test]
    fn is_named_when_name_is_not_blank() {
        let list = ShoppingList::new(Some("Groceries".into()), vec![]);
        assert!(list.is_named());
    }

    #[test]
    fn is_not_named_when_name_is_absent_or_blank() {
        for name in [None, Some(""), Some("   ")] {
            let list = ShoppingList::new(name.map(str::to_string), vec![]);
            assert!(!list.is_named(), "{:?} should not count as named", name);
        }
    }

    #[test]
    fn intersecting_empty_list_is_empty() {
        let list = ShoppingList::new(Some("Groceries".into()), vec![]);
        assert!(list.intersecting(&catalog()).is_empty());
    }

    #[test]
    fn intersecting_empty_catalog_is_empty() {
        let empty: Vec<RegisteredItem> = vec![];
        assert!(groceries().intersecting(&empty).is_empty());
    }

    #[test]
    fn intersecting_keeps_only_common_items() {
        let known = groceries().intersecting(&catalog());
        assert_eq!(names(&known), vec!["MILK"]);
    }

    #[test]
    fn intersecting_matches_on_normalized_name() {
        let list = ShoppingList::new(
            None,
            vec![ShoppingItem::new("  sweet   POTATO ", None, None, true)],
        );
        let catalog = vec![RegisteredItem::new("Sweet potato", None, None)];
        assert_eq!(list.intersecting(&catalog).len(), 1);
        assert!(list.without(&catalog).is_empty());
    }

    #[test]
    fn partitions_keep_the_list_name() {
        let list = groceries();
        assert_eq!(list.intersecting(&catalog()).name(), Some("Groceries"));
        assert_eq!(list.without(&catalog()).name(), Some("Groceries"));
    }

    #[test]
    fn without_empty_list_is_empty() {
        let list = ShoppingList::new(Some("Groceries".into()), vec![]);
        assert!(list.without(&catalog()).is_empty());
    }

    #[test]
    fn without_empty_catalog_returns_same_items() {
        let empty: Vec<RegisteredItem> = vec![];
        let list = groceries();
        assert_eq!(list.without(&empty), list);
    }

    #[test]
    fn without_removes_known_items() {
        let unknown = groceries().without(&catalog());
        assert_eq!(names(&unknown), vec!["BREAD", "EGGS"]);
    }

    #[test]
    fn duplicates_pass_through_partitions() {
        let list = ShoppingList::new(
            None,
            vec![
                ShoppingItem::new("Milk", None, None, false),
                ShoppingItem::new("milk", None, None, false),
                ShoppingItem::new("Tea", None, None, false),
            ],
        );
        assert_eq!(list.intersecting(&catalog()).len(), 2);
        assert_eq!(list.without(&catalog()).len(), 1);
    }

    #[test]
    fn accepts_plain_items_as_catalog() {
        let catalog = vec![Item::new("Bread", None)];
        assert_eq!(names(&groceries().intersecting(&catalog)), vec!["BREAD"]);
    }

    #[test]
    fn total_sums_checked_items_with_price() {
        let list = ShoppingList::new(
            None,
            vec![
                ShoppingItem::new("Milk", None, Some(1.10), true),
                ShoppingItem::new("Bread", None, Some(2.20), true),
                ShoppingItem::new("Eggs", None, Some(5.00), false),
                ShoppingItem::new("Salt", None, None, true),
            ],
        );
        assert!((list.total() - 3.30).abs() < f32::EPSILON * 10.0);
    }

    #[test]
    fn total_of_empty_list_is_zero() {
        assert_eq!(ShoppingList::empty().total(), 0.0);
    }
}
