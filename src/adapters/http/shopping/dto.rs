//! HTTP DTOs for shopping endpoints.
//!
//! These types decouple the wire format from domain types. The only lossy
//! mapping is the price: inbound prices closer to zero than one cent mean "no
//! price", and a missing price goes out as `0`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, DomainErrors};
use crate::domain::shopping::{RegisteredItem, ShoppingItem, ShoppingList};

/// Inbound prices with an absolute value below this are treated as absent.
pub const PRICE_EPSILON: f32 = 0.01;

// ════════════════════════════════════════════════════════════════════════════
// Wire shapes
// ════════════════════════════════════════════════════════════════════════════

/// One product line on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// `0` means no price.
    #[serde(default)]
    pub price: f32,
    #[serde(default)]
    pub checked: bool,
}

/// A shopping list on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShoppingListDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductDto>,
}

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to record a checked-out list.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordShoppingListRequest {
    pub shopping_list: ShoppingListDto,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredProductsResponse {
    pub products: Vec<ProductDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentShoppingListResponse {
    pub shopping_list: ShoppingListDto,
}

/// One error entry: code and description, plus details when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub code: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub details: std::collections::HashMap<String, String>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorEntry>,
}

impl From<&DomainError> for ErrorEntry {
    fn from(error: &DomainError) -> Self {
        Self {
            code: error.code.to_string(),
            description: error.description.clone(),
            details: error.details.clone(),
        }
    }
}

impl From<&DomainErrors> for ErrorResponse {
    fn from(errors: &DomainErrors) -> Self {
        Self {
            errors: errors.iter().map(ErrorEntry::from).collect(),
        }
    }
}

impl ErrorResponse {
    pub fn single(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorEntry {
                code: code.into(),
                description: description.into(),
                details: Default::default(),
            }],
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Mapping
// ════════════════════════════════════════════════════════════════════════════

/// Maps a wire price to a domain price.
pub fn price_from_wire(price: f32) -> Option<f32> {
    if price.abs() < PRICE_EPSILON {
        None
    } else {
        Some(price)
    }
}

/// Maps a domain price to a wire price.
pub fn price_to_wire(price: Option<f32>) -> f32 {
    price.unwrap_or(0.0)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

impl From<ProductDto> for ShoppingItem {
    fn from(dto: ProductDto) -> Self {
        ShoppingItem::new(dto.name, dto.quantity, price_from_wire(dto.price), dto.checked)
    }
}

impl From<ShoppingListDto> for ShoppingList {
    fn from(dto: ShoppingListDto) -> Self {
        ShoppingList::new(dto.name, dto.products.into_iter().map(Into::into).collect())
    }
}

impl From<&ShoppingItem> for ProductDto {
    fn from(item: &ShoppingItem) -> Self {
        Self {
            name: item.name().to_string(),
            quantity: non_blank(item.quantity()),
            price: price_to_wire(item.price()),
            checked: item.is_checked(),
        }
    }
}

impl From<&RegisteredItem> for ProductDto {
    fn from(item: &RegisteredItem) -> Self {
        Self {
            name: item.name().to_string(),
            quantity: non_blank(item.quantity()),
            price: price_to_wire(item.last_price()),
            checked: false,
        }
    }
}

impl From<&ShoppingList> for ShoppingListDto {
    fn from(list: &ShoppingList) -> Self {
        Self {
            name: non_blank(list.name()),
            products: list.iter().map(ProductDto::from).collect(),
        }
    }
}
