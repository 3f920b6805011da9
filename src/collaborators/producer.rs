//! Producer collaborator.
//!
//! Build-event observers use a `Producer` to append notifications. An empty
//! sound reference is a bug in the observer, not a data problem, so it is
//! logged loudly before being returned.

use crate::error::Result;
use chime_store::{NotificationId, NotificationStore, StoreError};
use std::sync::Arc;
use tracing::error;

/// Records new notifications.
///
/// Access via [`Chime::producer`](crate::Chime::producer).
#[derive(Debug, Clone)]
pub struct Producer {
    store: Arc<NotificationStore>,
}

impl Producer {
    pub(crate) fn new(store: Arc<NotificationStore>) -> Self {
        Self { store }
    }

    /// Record a notification and return its identifier.
    ///
    /// # Example
    ///
    /// ```
    /// let chime = chime::Chime::new();
    /// let id = chime.producer().record("alarm.wav", Some("nightly #12 broke")).unwrap();
    /// assert_eq!(id.as_u64(), 1);
    /// ```
    pub fn record(&self, sound_ref: &str, details: Option<&str>) -> Result<NotificationId> {
        match self.store.create_and_append(sound_ref, details) {
            Ok(notification) => Ok(notification.id()),
            Err(e @ StoreError::InvalidArgument(_)) => {
                error!(error = %e, ?details, "Producer supplied an invalid notification");
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Identifier of the newest notification in the log.
    pub fn last_id(&self) -> Result<Option<NotificationId>> {
        Ok(self.store.last_id()?)
    }
}
