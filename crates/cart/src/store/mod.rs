//! Persistent slot adapter for the cart line-item list.
//!
//! The whole cart is serialized as one unit into a single named slot; every
//! save is a full overwrite, never a partial patch. There is no locking and
//! no merge: concurrent writers to a shared slot are last-write-wins, a
//! documented limitation of the single-writer execution model.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use smilebrush_core::LineItem;

use crate::error::StoreError;

/// Durable storage for the cart list.
///
/// Implementations own the serialized representation of the slot and are its
/// sole reader/writer; the engine owns the in-memory list and injects the
/// store as an explicit handle.
pub trait CartStore {
    /// Read the slot.
    ///
    /// An absent slot is a fresh cart and loads as `Ok` with an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the slot exists but cannot be read or
    /// deserialized. The engine collapses this to an empty cart.
    fn load(&self) -> Result<Vec<LineItem>, StoreError>;

    /// Serialize and write the full list, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the slot cannot be written. The engine
    /// logs and absorbs this; the in-memory list is not rolled back.
    fn save(&self, items: &[LineItem]) -> Result<(), StoreError>;
}
