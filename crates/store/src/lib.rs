//! Notification store for Chime
//!
//! This crate implements the in-process notification log:
//! - NotificationStore: identifier factory, ordered index and repository in one
//! - RemovalCursor: forward cursor for detaching entries during a removal pass
//! - RetentionPolicy: ready-made removers for count and age based pruning
//! - StoreConfig: first identifier and lock wait behaviour

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod cursor;
pub mod retention;
pub mod store;

pub use config::{LockWait, StoreConfig};
pub use cursor::{NotificationRemover, RemovalCursor, RemovalReport};
pub use retention::{RetentionPolicy, RetentionSweep};
pub use store::{NotificationStore, StoreMetrics};

// Re-export the core vocabulary for convenience
pub use chime_core::{Notification, NotificationId, Result, StoreError, Timestamp};
