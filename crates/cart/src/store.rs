//! The cart store: hydration, the mutation pipeline, and change propagation.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, instrument, warn};

use treadline_core::ProductId;

use crate::config::CartConfig;
use crate::error::CartError;
use crate::inventory::InventoryService;
use crate::notify::{Notifier, Severity, messages};
use crate::outcome::CartOutcome;
use crate::storage::CartStorage;
use crate::types::{Cart, CartLine};

/// In-process cart state manager.
///
/// Owns the authoritative line collection, validates quantity changes
/// against [`InventoryService`] stock, mirrors every committed state to
/// [`CartStorage`], and pushes snapshots to subscribers. Handles are cheap
/// to clone and share one underlying store.
///
/// Mutations serialize on an internal lock held across the whole
/// read-check-write sequence, so concurrent callers cannot lose updates to
/// each other.
///
/// Stock is read once per operation with no re-validation at commit time; a
/// stock change on the inventory side during the operation can briefly
/// leave a committed quantity above the new level.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    config: CartConfig,
    inventory: Arc<dyn InventoryService>,
    storage: Arc<dyn CartStorage>,
    notifier: Arc<dyn Notifier>,
    /// Authoritative collection, equal to the last persisted snapshot.
    cart: Mutex<Cart>,
    /// Broadcasts the latest committed collection to subscribers.
    updates: watch::Sender<Cart>,
}

impl CartStore {
    /// Create a store, hydrating state from `storage`.
    ///
    /// A missing, unreadable, or unparseable snapshot hydrates as an empty
    /// cart; construction never fails.
    #[must_use]
    pub fn new(
        config: CartConfig,
        inventory: Arc<dyn InventoryService>,
        storage: Arc<dyn CartStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let cart = hydrate(storage.as_ref(), config.storage_key());
        let (updates, _) = watch::channel(cart.clone());

        Self {
            inner: Arc::new(CartStoreInner {
                config,
                inventory,
                storage,
                notifier,
                cart: Mutex::new(cart),
                updates,
            }),
        }
    }

    /// The most recently committed collection.
    #[must_use]
    pub fn current(&self) -> Cart {
        self.inner.updates.borrow().clone()
    }

    /// Subscribe to committed collection snapshots.
    ///
    /// The receiver always holds the latest committed state; intermediate
    /// states may be coalesced if the subscriber lags.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.inner.updates.subscribe()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Add one unit of a product to the cart.
    ///
    /// Checks fresh stock first, then either bumps the existing line in
    /// place or fetches product details and appends a new line. Never
    /// returns an error: rejections and failures are reported through the
    /// outcome, and shopper messaging goes through the notifier.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: ProductId) -> CartOutcome {
        let mut cart = self.inner.cart.lock().await;
        match self.try_add(&mut cart, product_id).await {
            Ok(outcome) => outcome,
            Err(err) => self.operation_failed(&err, messages::ADD_FAILED),
        }
    }

    /// Remove a product's line from the cart.
    ///
    /// Removing a product that is not in the cart is rejected with a
    /// notification and leaves the collection unchanged. Never queries
    /// inventory.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_product(&self, product_id: ProductId) -> CartOutcome {
        let mut cart = self.inner.cart.lock().await;

        if cart.line(product_id).is_none() {
            debug!("remove rejected: product not in cart");
            self.inner
                .notifier
                .notify(Severity::Error, messages::REMOVE_FAILED);
            return CartOutcome::RejectedNotFound;
        }

        let mut next = cart.clone();
        next.remove_line(product_id);
        match self.commit(&mut cart, next) {
            Ok(()) => CartOutcome::Updated,
            Err(err) => self.operation_failed(&err, messages::REMOVE_FAILED),
        }
    }

    /// Set a product's quantity to an absolute target.
    ///
    /// A non-positive target is dropped silently: no error, no
    /// notification, no persistence. This matches the long-standing
    /// frontend behavior of treating such requests as no-ops rather than
    /// removals. Positive targets are stock-checked like an add; targeting
    /// a product that is not in the cart re-persists the unchanged
    /// collection and still wakes subscribers.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn update_quantity(&self, product_id: ProductId, quantity: i64) -> CartOutcome {
        if quantity <= 0 {
            debug!("update ignored: non-positive target quantity");
            return CartOutcome::Ignored;
        }

        let mut cart = self.inner.cart.lock().await;
        match self.try_update(&mut cart, product_id, quantity).await {
            Ok(outcome) => outcome,
            Err(err) => self.operation_failed(&err, messages::UPDATE_FAILED),
        }
    }

    // =========================================================================
    // Pipeline internals
    // =========================================================================

    async fn try_add(
        &self,
        cart: &mut Cart,
        product_id: ProductId,
    ) -> Result<CartOutcome, CartError> {
        let current = cart.line(product_id).map_or(0, |line| line.quantity);
        let stock = self.inner.inventory.stock_level(product_id).await?;

        let requested = current.saturating_add(1);
        if requested > stock.quantity_available {
            debug!(
                requested,
                available = stock.quantity_available,
                "add rejected: insufficient stock"
            );
            self.inner
                .notifier
                .notify(Severity::Error, messages::STOCK_EXCEEDED);
            return Ok(CartOutcome::RejectedStockExceeded);
        }

        let mut next = cart.clone();
        if !next.set_quantity(product_id, requested) {
            // First unit of this product: details are fetched once, here.
            let product = self.inner.inventory.product(product_id).await?;
            next.push_line(CartLine {
                product,
                quantity: requested,
            });
        }

        self.commit(cart, next)?;
        Ok(CartOutcome::Updated)
    }

    async fn try_update(
        &self,
        cart: &mut Cart,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartOutcome, CartError> {
        let stock = self.inner.inventory.stock_level(product_id).await?;

        let requested = u32::try_from(quantity).unwrap_or(u32::MAX);
        if requested > stock.quantity_available {
            debug!(
                requested,
                available = stock.quantity_available,
                "update rejected: insufficient stock"
            );
            self.inner
                .notifier
                .notify(Severity::Error, messages::STOCK_EXCEEDED);
            return Ok(CartOutcome::RejectedStockExceeded);
        }

        let mut next = cart.clone();
        if !next.set_quantity(product_id, requested) {
            debug!("update target not in cart; re-persisting unchanged snapshot");
        }

        self.commit(cart, next)?;
        Ok(CartOutcome::Updated)
    }

    /// Persist `next`, then swap it in and wake subscribers.
    ///
    /// The ordering is the consistency guarantee: nothing changes in memory
    /// until the snapshot write succeeds, so a storage failure leaves both
    /// the collection and every observer at the previous state.
    fn commit(&self, cart: &mut Cart, next: Cart) -> Result<(), CartError> {
        let snapshot = serde_json::to_string(&next)?;
        self.inner
            .storage
            .write(self.inner.config.storage_key(), &snapshot)?;

        *cart = next;
        let _ = self.inner.updates.send_replace(cart.clone());
        Ok(())
    }

    /// Collapse a pipeline error into a `Failed` outcome plus the
    /// operation's generic notification. Call sites guarantee the
    /// collection is unchanged at this point.
    fn operation_failed(&self, err: &CartError, message: &'static str) -> CartOutcome {
        warn!(error = %err, "cart operation failed");
        self.inner.notifier.notify(Severity::Error, message);
        CartOutcome::Failed {
            reason: err.to_string(),
        }
    }
}

/// Load the persisted snapshot, falling back to an empty cart.
fn hydrate(storage: &dyn CartStorage, key: &str) -> Cart {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::empty(),
        Err(err) => {
            warn!(error = %err, "failed to read saved cart; starting empty");
            return Cart::empty();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(cart) => cart,
        Err(err) => {
            warn!(error = %err, "saved cart snapshot is unreadable; starting empty");
            Cart::empty()
        }
    }
}
