//! Error types for the notification store

use std::time::Duration;
use thiserror::Error;

/// Errors raised by notification store operations.
///
/// None of these are retried internally; every one reaches the caller
/// synchronously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Rejected input (empty sound reference). Nothing was mutated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Removal protocol misuse: removing before advancing, or removing the
    /// same element twice.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// Advanced a removal cursor that was already exhausted.
    #[error("no more elements")]
    NoMoreElements,

    /// A bounded-wait store could not enter its critical section in time.
    #[error("timed out after {0:?} waiting for the store lock")]
    LockTimeout(Duration),
}

impl StoreError {
    /// Input or protocol errors: the caller must change what it does.
    pub fn is_caller_bug(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidArgument(_) | StoreError::IllegalState(_)
        )
    }

    /// Lock contention; the same call may succeed later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::LockTimeout(_))
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
