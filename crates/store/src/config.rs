//! Store configuration.

use chime_core::{Result, StoreError};
use std::time::Duration;

/// How an operation waits for the store's critical section.
///
/// | Mode | Behaviour when the section is held |
/// |------|------------------------------------|
/// | Blocking | Waits until it is released (default) |
/// | Bounded(d) | Waits at most `d`, then fails with `LockTimeout` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockWait {
    /// Unbounded blocking wait.
    #[default]
    Blocking,
    /// Give up after the given duration.
    Bounded(Duration),
}

/// Configuration for a [`NotificationStore`](crate::NotificationStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Identifier handed to the first notification. Must be at least 1.
    pub first_id: u64,
    /// Lock wait behaviour shared by every operation.
    pub lock_wait: LockWait,
}

impl StoreConfig {
    /// Check the configuration before a store is built from it.
    pub fn validate(&self) -> Result<()> {
        if self.first_id == 0 {
            return Err(StoreError::InvalidArgument(
                "first_id must be at least 1".to_string(),
            ));
        }
        if let LockWait::Bounded(timeout) = self.lock_wait {
            if timeout.is_zero() {
                return Err(StoreError::InvalidArgument(
                    "bounded lock wait must be non-zero".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            first_id: 1,
            lock_wait: LockWait::Blocking,
        }
    }
}
