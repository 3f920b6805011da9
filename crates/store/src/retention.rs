//! Retention policies
//!
//! Ready-made removers for the common pruning strategies:
//!
//! - `KeepAll`: keep every notification (default)
//! - `KeepLast(n)`: keep the N newest notifications
//! - `KeepFor(duration)`: keep notifications appended within the window
//! - `Composite`: union of several policies (most permissive wins)
//!
//! A policy is applied by building a [`RetentionSweep`] for a given instant
//! and handing it to [`NotificationStore::remove_where`].
//!
//! [`NotificationStore::remove_where`]: crate::NotificationStore::remove_where

use crate::cursor::{NotificationRemover, RemovalCursor};
use chime_core::{Notification, Result, Timestamp};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which notifications survive a retention sweep.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RetentionPolicy {
    /// Keep everything.
    #[default]
    KeepAll,
    /// Keep the N newest notifications.
    KeepLast(usize),
    /// Keep notifications no older than the window.
    ///
    /// Serialized as whole seconds, e.g. `{"KeepFor": 3600}`.
    KeepFor(#[serde(with = "duration_secs")] Duration),
    /// Keep a notification if any member policy keeps it. Empty keeps all.
    Composite(Vec<RetentionPolicy>),
}

impl RetentionPolicy {
    /// Decide whether `notification` survives.
    ///
    /// `rank` is the notification's distance from the newest entry at the
    /// start of the sweep (0 for the newest).
    pub fn keeps(&self, notification: &Notification, rank: usize, now: Timestamp) -> bool {
        match self {
            RetentionPolicy::KeepAll => true,
            RetentionPolicy::KeepLast(n) => rank < *n,
            RetentionPolicy::KeepFor(window) => match chrono::Duration::from_std(*window) {
                Ok(window) => now.signed_duration_since(notification.created_at()) <= window,
                // Window too large to represent; nothing can be older than it.
                Err(_) => true,
            },
            RetentionPolicy::Composite(policies) => {
                policies.is_empty() || policies.iter().any(|p| p.keeps(notification, rank, now))
            }
        }
    }

    /// Build a remover that applies this policy as of `now`.
    pub fn sweeper(&self, now: Timestamp) -> RetentionSweep<'_> {
        RetentionSweep { policy: self, now }
    }
}

/// `Duration` as a bare number of seconds. Sub-second parts are dropped on
/// serialization.
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(window: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(window.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

/// A retention policy bound to the instant it is evaluated at.
#[derive(Debug, Clone)]
pub struct RetentionSweep<'p> {
    policy: &'p RetentionPolicy,
    now: Timestamp,
}

impl NotificationRemover for RetentionSweep<'_> {
    fn remove(&mut self, cursor: &mut RemovalCursor<'_>) -> Result<()> {
        if *self.policy == RetentionPolicy::KeepAll {
            return Ok(());
        }

        let total = cursor.len();
        let mut ordinal = 0;
        while let Some(notification) = cursor.advance()? {
            let rank = total - 1 - ordinal;
            ordinal += 1;
            if !self.policy.keeps(notification, rank, self.now) {
                cursor.remove_current()?;
            }
        }
        Ok(())
    }
}
