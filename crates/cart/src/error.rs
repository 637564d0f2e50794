//! Storage error type for the persisted cart slot.
//!
//! `StoreError` is internal plumbing: the cart engine collapses every
//! variant to the documented safe default (empty cart on load, unchanged
//! in-memory cart on save) and never propagates it to callers. Keeping the
//! error explicit makes the failure path testable in isolation.

use thiserror::Error;

/// Errors from the persistent slot adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written
    /// (missing directory, permissions, quota).
    #[error("Cart storage unavailable: {0}")]
    Io(#[from] std::io::Error),

    /// The slot held content that does not deserialize as a line-item list.
    /// Treated as an empty cart; there is no version field or migration path.
    #[error("Corrupt cart slot: {0}")]
    Corrupt(#[from] serde_json::Error),
}
