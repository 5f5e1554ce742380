//! Treadline Cart - client-side cart state management.
//!
//! This crate owns the shopper's cart between page loads: an in-process
//! line collection that validates quantity changes against live inventory,
//! mirrors every committed state to a persistence backend, and pushes
//! snapshots to observers.
//!
//! The storefront frontends drive it through [`store::CartStore`]; the
//! inventory source, persistence backend, and notification sink are all
//! injected through the traits in [`inventory`], [`storage`], and
//! [`notify`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod inventory;
pub mod notify;
pub mod outcome;
pub mod storage;
pub mod store;
pub mod types;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use config::CartConfig;
pub use error::CartError;
pub use inventory::{InventoryError, InventoryService};
pub use notify::{Notifier, Severity, TracingNotifier};
pub use outcome::CartOutcome;
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::CartStore;
pub use types::{Cart, CartLine, Product, StockLevel};
