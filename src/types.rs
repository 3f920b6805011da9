//! Public types for the Chime API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Notification records
pub use chime_core::{Notification, NotificationId, Timestamp};

// Errors returned by the store itself
pub use chime_core::{Result as StoreResult, StoreError};

// Removal protocol
pub use chime_store::{NotificationRemover, RemovalCursor, RemovalReport};

// Retention and store configuration
pub use chime_store::{LockWait, RetentionPolicy, StoreMetrics};

// Store itself, for callers that want to bypass the collaborators
pub use chime_store::NotificationStore;
