//! File-backed cart slot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use smilebrush_core::LineItem;

use crate::error::StoreError;

use super::CartStore;

/// A cart slot stored as one JSON array in a single file.
///
/// Saves are plain full-file overwrites. Two processes pointing at the same
/// path are last-write-wins with no conflict detection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot's file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> Result<Vec<LineItem>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            // No slot yet: a fresh cart, not a failure.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let items = serde_json::from_str(&data)?;
        Ok(items)
    }

    fn save(&self, items: &[LineItem]) -> Result<(), StoreError> {
        let data = serde_json::to_string(items)?;
        fs::write(&self.path, data)?;
        tracing::debug!(path = %self.path.display(), entries = items.len(), "cart slot written");
        Ok(())
    }
}
