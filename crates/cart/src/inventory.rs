//! Inventory port for product and stock lookups.
//!
//! This module defines the trait the cart uses to consult the product
//! catalog. It is the store's only remote integration point: every quantity
//! change is validated against a fresh stock read before anything is
//! committed.

use async_trait::async_trait;
use thiserror::Error;

use treadline_core::ProductId;

use crate::types::{Product, StockLevel};

/// Errors returned by inventory lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The product does not exist upstream.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The inventory source could not be reached.
    #[error("Inventory unavailable: {0}")]
    Unavailable(String),

    /// The inventory source answered with a payload we could not interpret.
    #[error("Malformed inventory response: {0}")]
    Malformed(String),
}

/// Read-only access to product and stock data.
///
/// Implementations are expected to hit the live source on every call; the
/// cart deliberately never caches stock numbers across operations.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Current available stock for a product.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError` if the product is unknown or the source
    /// cannot be queried.
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel, InventoryError>;

    /// Full product details for display.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError` if the product is unknown or the source
    /// cannot be queried.
    async fn product(&self, product_id: ProductId) -> Result<Product, InventoryError>;
}
