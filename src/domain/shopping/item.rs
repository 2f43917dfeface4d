//! Item value objects.
//!
//! `Item` is the shared core (name, quantity, normalized key). List lines and
//! catalog entries embed it rather than extending it.

use super::normalize;

/// A named product with an optional free-text quantity.
///
/// Identity for matching is the normalized name, never the raw name.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    quantity: Option<String>,
    normalized_name: String,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: Option<String>) -> Self {
        let name = name.into();
        let normalized_name = normalize(&name);
        Self {
            name,
            quantity,
            normalized_name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Option<&str> {
        self.quantity.as_deref()
    }

    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    /// True when both items share a matching key.
    pub fn matches(&self, other: &Item) -> bool {
        self.normalized_name == other.normalized_name
    }
}

impl AsRef<Item> for Item {
    fn as_ref(&self) -> &Item {
        self
    }
}

/// One line in a user's working shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    item: Item,
    price: Option<f32>,
    is_checked: bool,
}

impl ShoppingItem {
    pub fn new(
        name: impl Into<String>,
        quantity: Option<String>,
        price: Option<f32>,
        is_checked: bool,
    ) -> Self {
        Self {
            item: Item::new(name, quantity),
            price,
            is_checked,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn quantity(&self) -> Option<&str> {
        self.item.quantity()
    }

    pub fn normalized_name(&self) -> &str {
        self.item.normalized_name()
    }

    pub fn price(&self) -> Option<f32> {
        self.price
    }

    pub fn is_checked(&self) -> bool {
        self.is_checked
    }
}

impl AsRef<Item> for ShoppingItem {
    fn as_ref(&self) -> &Item {
        &self.item
    }
}

/// Last known state of an item in the user's personal catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredItem {
    item: Item,
    last_price: Option<f32>,
}

impl RegisteredItem {
    pub fn new(name: impl Into<String>, quantity: Option<String>, last_price: Option<f32>) -> Self {
        Self {
            item: Item::new(name, quantity),
            last_price,
        }
    }

    /// Registers a list line as a new catalog entry.
    pub fn from_shopping_item(item: &ShoppingItem) -> Self {
        Self {
            item: item.item().clone(),
            last_price: item.price(),
        }
    }

    /// Returns the entry refreshed with what was just bought.
    ///
    /// Quantity and price are replaced only when the purchase carries them.
    pub fn refreshed_with(&self, purchase: &ShoppingItem) -> Self {
        let quantity = purchase
            .quantity()
            .or(self.quantity())
            .map(str::to_string);
        Self {
            item: Item::new(self.name(), quantity),
            last_price: purchase.price().or(self.last_price),
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn quantity(&self) -> Option<&str> {
        self.item.quantity()
    }

    pub fn normalized_name(&self) -> &str {
        self.item.normalized_name()
    }

    pub fn last_price(&self) -> Option<f32> {
        self.last_price
    }
}

impl AsRef<Item> for RegisteredItem {
    fn as_ref(&self) -> &Item {
        &self.item
    }
}
