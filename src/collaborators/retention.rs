//! Retention collaborator.
//!
//! Runs removal passes against the shared store, either with the configured
//! default policy or with any custom remover.

use crate::error::Result;
use chime_store::{
    NotificationRemover, NotificationStore, RemovalReport, RetentionPolicy, Timestamp,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Prunes the notification log.
///
/// Access via [`Chime::retention`](crate::Chime::retention).
#[derive(Debug, Clone)]
pub struct Retention {
    store: Arc<NotificationStore>,
    policy: Arc<RetentionPolicy>,
}

impl Retention {
    pub(crate) fn new(store: Arc<NotificationStore>, policy: Arc<RetentionPolicy>) -> Self {
        Self { store, policy }
    }

    /// The configured default policy.
    pub fn policy(&self) -> &RetentionPolicy {
        &self.policy
    }

    /// Apply the default policy as of now.
    pub fn sweep(&self) -> Result<RemovalReport> {
        self.sweep_at(Utc::now())
    }

    /// Apply the default policy as of `now`.
    pub fn sweep_at(&self, now: Timestamp) -> Result<RemovalReport> {
        self.sweep_with(&self.policy, now)
    }

    /// Apply an explicit policy as of `now`.
    pub fn sweep_with(&self, policy: &RetentionPolicy, now: Timestamp) -> Result<RemovalReport> {
        let report = self.store.remove_where(&mut policy.sweeper(now))?;
        debug!(?policy, removed = report.removed, "Retention sweep finished");
        Ok(report)
    }

    /// Run a removal pass with a custom remover.
    ///
    /// The store is locked for the whole pass; keep removers quick.
    pub fn remove_where<R>(&self, remover: &mut R) -> Result<RemovalReport>
    where
        R: NotificationRemover + ?Sized,
    {
        Ok(self.store.remove_where(remover)?)
    }
}
