//! Notification types
//!
//! This module defines the records held by the notification log:
//! - [`NotificationId`]: opaque, totally ordered identifier
//! - [`Notification`]: sound reference plus optional build details

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall-clock instant a notification was appended.
pub type Timestamp = DateTime<Utc>;

/// Identifier of a notification in the log
///
/// Backed by a `u64` sequence that starts at 1 and only ever grows. Ordering
/// of identifiers is the ordering of the log itself, so an identifier doubles
/// as a cursor for "newer than" queries even after its own entry is removed.
///
/// # Examples
///
/// ```
/// use chime_core::NotificationId;
///
/// let a = NotificationId::new(1);
/// let b = NotificationId::new(2);
/// assert!(a < b);
/// assert_eq!(b.as_u64(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wrap a raw sequence value
    pub const fn new(value: u64) -> Self {
        NotificationId(value)
    }

    /// Raw sequence value
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for NotificationId {
    fn from(value: u64) -> Self {
        NotificationId(value)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An audio notification
///
/// Notifications are created once by the store and never mutated. Each one
/// carries:
/// - the identifier assigned at append time
/// - a reference to the sound to play (never empty)
/// - optional free-form details about the build that triggered it
/// - the time it was appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    sound_ref: String,
    details: Option<String>,
    created_at: Timestamp,
}

impl Notification {
    /// Assemble a notification.
    ///
    /// Only the store hands out identifiers, so outside of it this is mostly
    /// useful for building expected values in tests.
    pub fn new(
        id: NotificationId,
        sound_ref: impl Into<String>,
        details: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            sound_ref: sound_ref.into(),
            details,
            created_at,
        }
    }

    /// Identifier assigned at append time
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Reference to the sound resource
    pub fn sound_ref(&self) -> &str {
        &self.sound_ref
    }

    /// Build details, if any were supplied
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Time the notification was appended
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "#{} {} ({})", self.id, self.sound_ref, details),
            None => write!(f, "#{} {}", self.id, self.sound_ref),
        }
    }
}
