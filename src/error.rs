//! Unified error types for Chime.
//!
//! This module provides a clean error type that wraps store errors
//! and presents a consistent interface to users.

use chime_core::StoreError;
use std::time::Duration;
use thiserror::Error;

/// All Chime errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected input (e.g. empty sound reference)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Removal protocol misuse by a remover
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// A removal cursor was advanced past its end
    #[error("no more elements")]
    NoMoreElements,

    /// The store lock could not be acquired within the configured wait
    #[error("lock timeout after {0:?}")]
    LockTimeout(Duration),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for Chime operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is retryable.
    ///
    /// Lock timeouts may succeed once the current holder releases the store.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::LockTimeout(_))
    }

    /// Check if this error points at a bug in the calling code.
    pub fn is_caller_bug(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::IllegalState(_))
    }
}

// Convert from store errors
impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidArgument(msg) => Error::InvalidArgument(msg),
            StoreError::IllegalState(msg) => Error::IllegalState(msg),
            StoreError::NoMoreElements => Error::NoMoreElements,
            StoreError::LockTimeout(timeout) => Error::LockTimeout(timeout),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
