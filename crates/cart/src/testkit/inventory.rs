//! Seedable in-memory [`InventoryService`] implementation.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use treadline_core::ProductId;

use crate::inventory::{InventoryError, InventoryService};
use crate::types::{Product, StockLevel};

/// In-memory inventory with scripted stock numbers and call counters.
///
/// Lookups hit the seeded table on every call, like the live implementation
/// hits the catalog API. Flip `set_offline(true)` to make every lookup fail
/// with [`InventoryError::Unavailable`].
#[derive(Default)]
pub struct StaticInventory {
    entries: RwLock<Vec<(Product, u32)>>,
    offline: AtomicBool,
    stock_calls: AtomicU32,
    product_calls: AtomicU32,
}

impl StaticInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a product with its available stock, replacing any previous entry.
    pub fn insert(&self, product: Product, quantity_available: u32) {
        let mut entries = self.entries.write();
        entries.retain(|(existing, _)| existing.id != product.id);
        entries.push((product, quantity_available));
    }

    /// Change the available stock for an already-seeded product.
    pub fn set_available(&self, product_id: ProductId, quantity_available: u32) {
        let mut entries = self.entries.write();
        if let Some(entry) = entries
            .iter_mut()
            .find(|(product, _)| product.id == product_id)
        {
            entry.1 = quantity_available;
        }
    }

    /// Make every lookup fail with `Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of `stock_level` calls made so far.
    pub fn stock_calls(&self) -> u32 {
        self.stock_calls.load(Ordering::SeqCst)
    }

    /// Number of `product` calls made so far.
    pub fn product_calls(&self) -> u32 {
        self.product_calls.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), InventoryError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(InventoryError::Unavailable("inventory offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryService for StaticInventory {
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel, InventoryError> {
        self.stock_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        self.entries
            .read()
            .iter()
            .find(|(product, _)| product.id == product_id)
            .map(|(_, quantity_available)| StockLevel {
                product_id,
                quantity_available: *quantity_available,
            })
            .ok_or(InventoryError::NotFound(product_id))
    }

    async fn product(&self, product_id: ProductId) -> Result<Product, InventoryError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        self.entries
            .read()
            .iter()
            .find(|(product, _)| product.id == product_id)
            .map(|(product, _)| product.clone())
            .ok_or(InventoryError::NotFound(product_id))
    }
}
