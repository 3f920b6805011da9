//! Notification Store Comprehensive Test Suite
//!
//! ## Modules
//!
//! - `basic_ops`: create, last identifier, validation
//! - `queries`: newer-than queries and cursor boundaries
//! - `removal`: removal passes and the cursor protocol
//! - `concurrency`: multi-threaded ordering and isolation
//! - `retention`: retention policies through the facade
//! - `collaborators`: producer / poller / retention working together
//! - `interleaving`: random create / removal / poll sequences

pub use chime::prelude::*;
pub use chime::{LockWait, NotificationStore, StoreError, StoreMetrics, StoreResult};
pub use std::sync::Arc;

mod collaborators;
mod removal;

/// Install a subscriber once so `RUST_LOG`-style output shows up with `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A fresh shared store.
pub fn quick_setup() -> Arc<NotificationStore> {
    init_tracing();
    Arc::new(NotificationStore::new())
}

/// A store seeded with `n` notifications, identifiers 1..=n.
pub fn seeded_store(n: u64) -> Arc<NotificationStore> {
    let store = quick_setup();
    for i in 1..=n {
        store
            .create_and_append(&format!("sound_{}.wav", i), Some(&format!("build {}", i)))
            .unwrap();
    }
    store
}

/// Identifier values of a notification slice.
pub fn ids(notifications: &[Notification]) -> Vec<u64> {
    notifications.iter().map(|n| n.id().as_u64()).collect()
}

/// Identifier values currently live in the store.
pub fn live_ids(store: &NotificationStore) -> Vec<u64> {
    ids(&store.find_newer_than(None).unwrap())
}

pub fn nid(n: u64) -> NotificationId {
    NotificationId::new(n)
}
