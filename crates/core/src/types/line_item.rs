//! Cart line items and unit price resolution.

use serde::{Deserialize, Serialize};

use super::id::{ColorCode, LineItemId, ProductId};
use super::price::Price;
use super::variant::ColorVariant;

/// A single cart entry.
///
/// Name, image and price fields are display snapshots captured when the item
/// is added; they are never re-synced with later catalog changes. Only
/// `quantity` is mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique entry id, assigned at add-time and never recomputed.
    pub id: LineItemId,
    /// Catalog product this entry refers to. Not unique within the cart:
    /// the same product may appear once per selected color.
    pub product_id: ProductId,
    /// Display name snapshot.
    pub name: String,
    /// Display image snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Base unit price snapshot.
    pub price: Price,
    /// Item-level discount. When present it wins over all variant pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Price>,
    /// Selected color variant, if the product has colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<ColorVariant>,
    /// Positive quantity. An entry at quantity zero is removed, never kept.
    pub quantity: u32,
}

/// A candidate line item as supplied by a product page, before the cart
/// assigns an id and quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub image: Option<String>,
    pub price: Price,
    pub discount_price: Option<Price>,
    pub selected_color: Option<ColorVariant>,
}

impl NewLineItem {
    /// Create a candidate with just a product and base price.
    pub fn new(product_id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            image: None,
            price,
            discount_price: None,
            selected_color: None,
        }
    }

    /// Set the item-level discount price.
    #[must_use]
    pub fn with_discount(mut self, discount_price: Price) -> Self {
        self.discount_price = Some(discount_price);
        self
    }

    /// Set the selected color variant.
    #[must_use]
    pub fn with_color(mut self, color: ColorVariant) -> Self {
        self.selected_color = Some(color);
        self
    }

    /// Set the display image snapshot.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The deduplication key this candidate would merge under.
    #[must_use]
    pub fn variant_key(&self) -> VariantKey<'_> {
        VariantKey {
            product_id: &self.product_id,
            color_code: self.selected_color.as_ref().map(|c| &c.code),
        }
    }

    /// Promote the candidate to a full line item with a fresh id.
    #[must_use]
    pub fn into_line_item(self, quantity: u32) -> LineItem {
        LineItem {
            id: LineItemId::generate(&self.product_id),
            product_id: self.product_id,
            name: self.name,
            image: self.image,
            price: self.price,
            discount_price: self.discount_price,
            selected_color: self.selected_color,
            quantity,
        }
    }
}

/// Identity key for cart deduplication: at most one entry exists per distinct
/// `(product, color code)` pair. Color-less items key on the product alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantKey<'a> {
    pub product_id: &'a ProductId,
    pub color_code: Option<&'a ColorCode>,
}

impl LineItem {
    /// The deduplication key for this entry.
    #[must_use]
    pub fn variant_key(&self) -> VariantKey<'_> {
        VariantKey {
            product_id: &self.product_id,
            color_code: self.selected_color.as_ref().map(|c| &c.code),
        }
    }

    /// The effective per-unit price the customer pays for this entry.
    ///
    /// Precedence, first defined value wins:
    /// 1. item-level discount price
    /// 2. variant-level discount price
    /// 3. variant-level base price
    /// 4. item-level base price
    ///
    /// An item-level discount overrides variant pricing entirely, even when
    /// the variant carries a lower discount of its own. This ordering is
    /// business policy and is observable in cart totals.
    #[must_use]
    pub fn resolved_unit_price(&self) -> Price {
        if let Some(discount) = self.discount_price {
            return discount;
        }
        match &self.selected_color {
            Some(color) => color
                .discount_price
                .or(color.price)
                .unwrap_or(self.price),
            None => self.price,
        }
    }

    /// Resolved unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.resolved_unit_price() * self.quantity
    }
}
