//! Integration tests for mutation serialization under concurrency.
//!
//! The store holds one lock across each read-check-write sequence, so
//! concurrent callers must never lose updates to each other and stock
//! bounds must hold no matter how calls interleave.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use treadline_cart::config::DEFAULT_STORAGE_KEY;
use treadline_cart::notify::messages;
use treadline_cart::{Cart, CartOutcome, CartStorage, MemoryStorage};
use treadline_core::ProductId;
use treadline_integration_tests::{init_tracing, store_with_storage};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_never_lose_updates() {
    init_tracing();
    // Product 3 has stock 10: ten concurrent adds must all land
    let (store, inventory, notifier) = store_with_storage(Arc::new(MemoryStorage::new()));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.add_product(ProductId::new(3)).await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), CartOutcome::Updated);
    }

    let cart = store.current();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.line(ProductId::new(3)).unwrap().quantity, 10);
    // Exactly one line was created despite the racing first adds
    assert_eq!(inventory.product_calls(), 1);
    assert!(notifier.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds_respect_stock_bound() {
    init_tracing();
    // Product 2 has stock 3: of eight concurrent adds, exactly three land
    let (store, _inventory, notifier) = store_with_storage(Arc::new(MemoryStorage::new()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.add_product(ProductId::new(2)).await
        }));
    }

    let mut updated = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            CartOutcome::Updated => updated += 1,
            CartOutcome::RejectedStockExceeded => rejected += 1,
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    assert_eq!(updated, 3);
    assert_eq!(rejected, 5);
    assert_eq!(store.current().line(ProductId::new(2)).unwrap().quantity, 3);
    assert_eq!(notifier.len(), 5);
    assert!(
        notifier
            .messages()
            .iter()
            .all(|message| message == messages::STOCK_EXCEEDED)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_interleaved_operations_keep_mirror_consistent() {
    init_tracing();
    let storage = Arc::new(MemoryStorage::new());
    let (store, _inventory, _notifier) = store_with_storage(storage.clone());

    let mut handles = Vec::new();
    for _ in 0..5 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.add_product(ProductId::new(1)).await;
            store.add_product(ProductId::new(3)).await;
            store.update_quantity(ProductId::new(3), 2).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let cart = store.current();
    // Unique lines, insertion order preserved, quantities within stock
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 5);
    assert_eq!(cart.line(ProductId::new(3)).unwrap().quantity, 2);

    // The persisted snapshot is the settled in-memory state
    let raw = storage.read(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let persisted: Cart = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, cart);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_subscriber_converges_on_settled_state() {
    init_tracing();
    let (store, _inventory, _notifier) = store_with_storage(Arc::new(MemoryStorage::new()));
    let mut updates = store.subscribe();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.add_product(ProductId::new(3)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Intermediate snapshots may coalesce; the latest one is the settled
    // state
    assert!(updates.has_changed().unwrap());
    let settled = updates.borrow_and_update().clone();
    assert_eq!(settled, store.current());
    assert_eq!(settled.line(ProductId::new(3)).unwrap().quantity, 4);
}
