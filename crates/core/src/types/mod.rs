//! Core types for SmileBrush.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line_item;
pub mod price;
pub mod variant;

pub use id::*;
pub use line_item::{LineItem, NewLineItem, VariantKey};
pub use price::Price;
pub use variant::ColorVariant;
