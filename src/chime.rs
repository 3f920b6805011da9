//! Main entry point for Chime.
//!
//! This module provides the `Chime` handle, which owns one notification
//! store and hands out the collaborators that record, poll and prune it.

use crate::collaborators::{Poller, Producer, Retention};
use crate::config::ChimeConfig;
use crate::error::{Error, Result};
use chime_store::{LockWait, NotificationId, NotificationStore, RetentionPolicy, StoreMetrics};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// A notification log and its collaborators.
///
/// Cloning is cheap: clones share the same store.
///
/// # Example
///
/// ```
/// use chime::Chime;
///
/// let chime = Chime::new();
/// let producer = chime.producer();
/// let mut poller = chime.poller();
///
/// producer.record("a.wav", Some("build #1 failed")).unwrap();
/// let batch = poller.poll().unwrap();
/// assert_eq!(batch.len(), 1);
/// assert!(poller.poll().unwrap().is_empty());
/// ```
#[derive(Clone)]
pub struct Chime {
    store: Arc<NotificationStore>,
    retention: Arc<RetentionPolicy>,
}

impl Chime {
    /// Create a Chime with default settings.
    pub fn new() -> Self {
        Self {
            store: Arc::new(NotificationStore::new()),
            retention: Arc::new(RetentionPolicy::KeepAll),
        }
    }

    /// Create a builder for Chime configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use chime::{Chime, RetentionPolicy};
    /// use std::time::Duration;
    ///
    /// let chime = Chime::builder()
    ///     .lock_timeout(Duration::from_millis(200))
    ///     .retention(RetentionPolicy::KeepLast(100))
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder() -> ChimeBuilder {
        ChimeBuilder::new()
    }

    /// Create a Chime from a configuration.
    pub fn from_config(config: ChimeConfig) -> Result<Self> {
        config.validate()?;
        let store = NotificationStore::with_config(config.store_config())?;
        info!(
            first_id = config.first_id,
            lock_timeout_ms = ?config.lock_timeout_ms,
            retention = ?config.retention,
            "Notification log ready"
        );
        Ok(Self {
            store: Arc::new(store),
            retention: Arc::new(config.retention),
        })
    }

    /// Collaborator that records new notifications.
    pub fn producer(&self) -> Producer {
        Producer::new(self.store.clone())
    }

    /// Collaborator that polls for notifications, starting from the beginning.
    pub fn poller(&self) -> Poller {
        Poller::new(self.store.clone(), None)
    }

    /// Collaborator that polls for notifications newer than `baseline`.
    pub fn poller_from(&self, baseline: NotificationId) -> Poller {
        Poller::new(self.store.clone(), Some(baseline))
    }

    /// Collaborator that prunes the log.
    pub fn retention(&self) -> Retention {
        Retention::new(self.store.clone(), self.retention.clone())
    }

    /// Direct access to the underlying store.
    pub fn store(&self) -> &Arc<NotificationStore> {
        &self.store
    }

    /// Store counters.
    pub fn metrics(&self) -> Result<StoreMetrics> {
        self.store.metrics().map_err(Error::from)
    }
}

impl Default for Chime {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Chime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chime")
            .field("store", &self.store)
            .field("retention", &self.retention)
            .finish()
    }
}

/// Builder for Chime configuration.
#[derive(Debug, Clone, Default)]
pub struct ChimeBuilder {
    config: ChimeConfig,
}

impl ChimeBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: ChimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Identifier handed to the first notification.
    pub fn first_id(mut self, first_id: u64) -> Self {
        self.config.first_id = first_id;
        self
    }

    /// How every operation waits for the store lock.
    ///
    /// Bounded waits are kept at millisecond resolution, rounded up to at
    /// least 1ms.
    pub fn lock_wait(mut self, wait: LockWait) -> Self {
        self.config.lock_timeout_ms = match wait {
            LockWait::Blocking => None,
            LockWait::Bounded(timeout) => {
                Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX).max(1))
            }
        };
        self
    }

    /// Fail with `LockTimeout` instead of blocking longer than `timeout`.
    pub fn lock_timeout(self, timeout: Duration) -> Self {
        self.lock_wait(LockWait::Bounded(timeout))
    }

    /// Block indefinitely for the store lock (default).
    pub fn blocking(self) -> Self {
        self.lock_wait(LockWait::Blocking)
    }

    /// Default policy used by [`Retention::sweep`].
    pub fn retention(mut self, policy: RetentionPolicy) -> Self {
        self.config.retention = policy;
        self
    }

    /// Build the Chime.
    pub fn build(self) -> Result<Chime> {
        Chime::from_config(self.config)
    }
}
