//! Notification capture for asserting shopper-visible messages.

use parking_lot::Mutex;

use crate::notify::{Notifier, Severity};

/// Records every notification in emission order.
#[derive(Default)]
pub struct RecordingNotifier {
    recorded: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(severity, message)` pairs recorded so far.
    #[must_use]
    pub fn recorded(&self) -> Vec<(Severity, String)> {
        self.recorded.lock().clone()
    }

    /// Messages only, in emission order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.recorded
            .lock()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Number of recorded notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recorded.lock().len()
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recorded.lock().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.recorded.lock().push((severity, message.to_string()));
    }
}
