//! Treadline Core - Shared types library.
//!
//! This crate provides common types used across all Treadline components:
//! - `cart` - Client-side cart state management
//! - the storefront frontends that embed it
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no clients. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and money values

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
