//! Integration tests for Treadline.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p treadline-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Operation outcomes and notification copy
//! - `cart_persistence` - Snapshot rehydration across store instances
//! - `cart_concurrency` - Serialization of concurrent mutations

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use treadline_cart::testkit::domain::product;
use treadline_cart::testkit::inventory::StaticInventory;
use treadline_cart::testkit::notify::RecordingNotifier;
use treadline_cart::{CartConfig, CartStorage, CartStore};

/// Initialize tracing for a test binary. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// Inventory seeded with the canonical test catalog:
///
/// | id | title         | price   | stock |
/// |----|---------------|---------|-------|
/// | 1  | Cloudrunner 2 | $149.90 | 5     |
/// | 2  | Court Classic | $89.00  | 3     |
/// | 3  | Trail Former  | $119.50 | 10    |
#[must_use]
pub fn seeded_inventory() -> Arc<StaticInventory> {
    let inventory = Arc::new(StaticInventory::new());
    inventory.insert(product(1, "Cloudrunner 2", 14990), 5);
    inventory.insert(product(2, "Court Classic", 8900), 3);
    inventory.insert(product(3, "Trail Former", 11950), 10);
    inventory
}

/// A store wired to the seeded inventory, a recording notifier, and the
/// given storage backend.
#[must_use]
pub fn store_with_storage(
    storage: Arc<dyn CartStorage>,
) -> (CartStore, Arc<StaticInventory>, Arc<RecordingNotifier>) {
    let inventory = seeded_inventory();
    let notifier = Arc::new(RecordingNotifier::new());
    let store = CartStore::new(
        CartConfig::default(),
        inventory.clone(),
        storage,
        notifier.clone(),
    );
    (store, inventory, notifier)
}
