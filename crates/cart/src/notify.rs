//! Shopper-facing notifications emitted by cart operations.
//!
//! The store reports rejections and failures through a [`Notifier`] rather
//! than through return-value errors, so frontends can surface them as toasts
//! without unwinding anything.

use tracing::{error, info, warn};

/// How prominently a notification should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Notification copy for cart operations.
///
/// The frontends render these strings verbatim; changing one is a copy
/// change, not a refactor.
pub mod messages {
    /// The requested quantity is above what inventory has available.
    pub const STOCK_EXCEEDED: &str = "requested quantity exceeds stock";

    /// Adding a product failed unexpectedly.
    pub const ADD_FAILED: &str = "failed to add product";

    /// Removing a product failed (it was not in the cart).
    pub const REMOVE_FAILED: &str = "failed to remove product";

    /// Changing a quantity failed unexpectedly.
    pub const UPDATE_FAILED: &str = "failed to update product quantity";
}

/// Sink for shopper-visible notifications.
///
/// Implementations must be thread-safe and should return quickly; the store
/// calls this inline from its mutation pipeline. Slow delivery (HTTP, UI
/// bridges) belongs in a spawned task.
pub trait Notifier: Send + Sync {
    /// Surface a message to the shopper.
    fn notify(&self, severity: Severity, message: &str);
}

/// Notifier that routes messages to the tracing subscriber.
///
/// The default sink for binaries and tests that have no UI attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!("{message}"),
            Severity::Warning => warn!("{message}"),
            Severity::Error => error!("{message}"),
        }
    }
}
