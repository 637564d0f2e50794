//! In-memory cart slot for tests and ephemeral sessions.

use std::cell::RefCell;
use std::rc::Rc;

use smilebrush_core::LineItem;

use crate::error::StoreError;

use super::CartStore;

/// A cart slot held in memory.
///
/// Cloning produces another handle to the same slot, which makes the
/// last-write-wins behavior of two carts sharing one slot observable in
/// tests without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Vec<LineItem>>>,
}

impl MemoryStore {
    /// Create an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the slot's current content.
    #[must_use]
    pub fn contents(&self) -> Vec<LineItem> {
        self.slot.borrow().clone()
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Result<Vec<LineItem>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, items: &[LineItem]) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = items.to_vec();
        Ok(())
    }
}
