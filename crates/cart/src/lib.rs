//! SmileBrush Cart - Persisted shopping cart engine.
//!
//! The cart is a best-effort client-side convenience layer, not a system of
//! record: the whole line-item list lives in one persisted slot, mutations
//! are synchronous, and every storage failure degrades to a safe default
//! (empty or unchanged cart) instead of surfacing to the caller.
//!
//! # Modules
//!
//! - [`engine`] - Cart mutations, totals, and the uniqueness invariant
//! - [`store`] - The persistent slot adapter (`CartStore`) and its
//!   file-backed and in-memory implementations
//! - [`events`] - Payload-free "cart changed" notification
//! - [`config`] - Slot path resolution from the environment
//!
//! # Example
//!
//! ```rust
//! use smilebrush_cart::{Cart, MemoryStore};
//! use smilebrush_core::{NewLineItem, Price};
//!
//! let mut cart = Cart::open(MemoryStore::new());
//! cart.add(NewLineItem::new("sonic-pro-x1", "Sonic Pro X1", Price::from_lira(1300)));
//! assert_eq!(cart.count(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use engine::{Cart, CartSummary};
pub use error::StoreError;
pub use events::ChangeNotifier;
pub use store::{CartStore, JsonFileStore, MemoryStore};
