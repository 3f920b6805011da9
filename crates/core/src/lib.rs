//! Core types for Chime
//!
//! This crate defines the vocabulary shared by every layer:
//! - [`NotificationId`]: strictly increasing identifier assigned at append time
//! - [`Notification`]: immutable record of one audio notification
//! - [`StoreError`]: error kinds surfaced by the notification store

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Result, StoreError};
pub use types::{Notification, NotificationId, Timestamp};
