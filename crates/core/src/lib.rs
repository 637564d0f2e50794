//! SmileBrush Core - Shared types library.
//!
//! This crate provides the domain types shared across all SmileBrush
//! components:
//! - `cart` - Persisted shopping cart engine
//! - `integration-tests` - Cross-crate test harness
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no file
//! access, no storage adapters. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, color variants, and cart line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
