//! Internal error type for the cart mutation pipeline.
//!
//! These errors never escape a cart operation: the store collapses them to a
//! [`CartOutcome::Failed`](crate::outcome::CartOutcome) plus the operation's
//! generic shopper notification.

use thiserror::Error;

use crate::inventory::InventoryError;
use crate::storage::StorageError;

/// Pipeline-level error for cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Inventory lookup failed.
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Persistence operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Snapshot serialization or deserialization failed.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
