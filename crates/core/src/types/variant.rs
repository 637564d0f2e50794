//! Color variant descriptor for products and cart lines.

use serde::{Deserialize, Serialize};

use super::id::ColorCode;
use super::price::Price;

/// A color variant of a product.
///
/// A variant may carry its own price and discount, overriding the product's
/// base price when selected. `code` is the variant's identity key: two cart
/// lines for the same product merge only when their color codes match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariant {
    /// Display name (e.g., "Gece Mavisi").
    pub name: String,
    /// Identity key for deduplication (e.g., "midnight-blue").
    pub code: ColorCode,
    /// Variant-level base price override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// Variant-level discount price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Price>,
}

impl ColorVariant {
    /// Create a variant with no price overrides.
    pub fn new(name: impl Into<String>, code: impl Into<ColorCode>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            price: None,
            discount_price: None,
        }
    }
}
