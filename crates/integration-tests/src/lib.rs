//! Integration tests for SmileBrush.
//!
//! These tests drive the cart engine over the real file-backed slot, the way
//! the storefront pages do: open, mutate, reopen, and observe what survived.
//! Unit-level behavior lives in `#[cfg(test)]` modules inside each crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

use smilebrush_core::{ColorVariant, NewLineItem, Price};

/// Candidate for the flagship brush at its catalog price.
#[must_use]
pub fn sonic_pro() -> NewLineItem {
    NewLineItem::new("sonic-pro-x1", "Sonic Pro X1", Price::from_kurus(129_990))
        .with_image("products/sonic-pro-x1.webp")
}

/// Candidate for the flagship brush in a given color, with a variant price.
#[must_use]
pub fn sonic_pro_in(color_name: &str, color_code: &str, price: Price) -> NewLineItem {
    let mut color = ColorVariant::new(color_name, color_code);
    color.price = Some(price);
    sonic_pro().with_color(color)
}

/// Candidate for a discounted accessory.
#[must_use]
pub fn travel_case() -> NewLineItem {
    NewLineItem::new("travel-case", "Seyahat Kabı", Price::from_lira(250))
        .with_discount(Price::from_lira(199))
}
