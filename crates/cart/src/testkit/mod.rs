//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] — Builders for domain primitives.
//! - [`inventory`] — [`StaticInventory`](inventory::StaticInventory), a
//!   seedable in-memory inventory with call counters.
//! - [`notify`] — [`RecordingNotifier`](notify::RecordingNotifier), captures
//!   emitted notifications for assertions.

pub mod domain;
pub mod inventory;
pub mod notify;
