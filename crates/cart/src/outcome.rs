//! Operation outcomes reported by the cart store.

/// Result of a cart mutation.
///
/// Cart operations never propagate errors to the caller: every call runs to
/// completion and reports one of these outcomes. Shopper-visible messaging
/// happens through the [`Notifier`](crate::notify::Notifier) as a side
/// effect; the outcome is for callers that branch on what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    /// The collection changed, or an equivalent snapshot was re-persisted.
    Updated,
    /// The request asked for more units than inventory has available.
    RejectedStockExceeded,
    /// The product is not in the cart.
    RejectedNotFound,
    /// The request was dropped without effect (non-positive target
    /// quantity).
    Ignored,
    /// An inventory or persistence failure interrupted the operation. The
    /// collection is unchanged.
    Failed {
        /// The failure reason.
        reason: String,
    },
}

impl CartOutcome {
    /// Check if the operation committed a snapshot.
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated)
    }

    /// Check if the operation was rejected by a business rule.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::RejectedStockExceeded | Self::RejectedNotFound)
    }

    /// Check if the operation failed unexpectedly.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        assert!(CartOutcome::Updated.is_updated());
        assert!(CartOutcome::RejectedStockExceeded.is_rejected());
        assert!(CartOutcome::RejectedNotFound.is_rejected());
        assert!(!CartOutcome::Ignored.is_rejected());
        assert!(
            CartOutcome::Failed {
                reason: "storage".to_string()
            }
            .is_failed()
        );
        assert!(!CartOutcome::Updated.is_failed());
    }
}
