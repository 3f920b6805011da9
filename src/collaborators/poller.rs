//! Poller collaborator.
//!
//! A client-facing endpoint keeps one `Poller` per client. Each poll returns
//! the notifications appended since the previous one and moves the baseline
//! forward to the newest identifier returned. Removal of the baseline's own
//! entry by retention does not disturb this: the store answers "newer than"
//! by identifier value, not by position.

use crate::error::Result;
use chime_store::{Notification, NotificationId, NotificationStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::trace;

/// What a poller exposes for each notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    /// Notification identifier
    pub id: NotificationId,
    /// Sound to play
    pub sound_ref: String,
    /// Build details, if any
    pub details: Option<String>,
}

impl From<&Notification> for NotificationView {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id(),
            sound_ref: n.sound_ref().to_string(),
            details: n.details().map(str::to_string),
        }
    }
}

/// One poll result together with the baseline to resume from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollBatch {
    /// Baseline after this poll
    pub last_id: Option<NotificationId>,
    /// Notifications newer than the previous baseline, oldest first
    pub notifications: Vec<NotificationView>,
}

/// Fetches notifications newer than a baseline.
///
/// Access via [`Chime::poller`](crate::Chime::poller).
#[derive(Debug, Clone)]
pub struct Poller {
    store: Arc<NotificationStore>,
    baseline: Option<NotificationId>,
}

impl Poller {
    pub(crate) fn new(store: Arc<NotificationStore>, baseline: Option<NotificationId>) -> Self {
        Self { store, baseline }
    }

    /// Newest identifier seen so far.
    pub fn baseline(&self) -> Option<NotificationId> {
        self.baseline
    }

    /// Fetch everything newer than the baseline and advance it.
    ///
    /// An empty result leaves the baseline unchanged.
    pub fn poll(&mut self) -> Result<Vec<NotificationView>> {
        let newer = self.store.find_newer_than(self.baseline)?;
        if let Some(newest) = newer.last() {
            self.baseline = Some(newest.id());
        }
        trace!(count = newer.len(), baseline = ?self.baseline, "Polled notifications");
        Ok(newer.iter().map(NotificationView::from).collect())
    }

    /// Like [`poll`](Self::poll), bundled with the new baseline.
    pub fn poll_batch(&mut self) -> Result<PollBatch> {
        let notifications = self.poll()?;
        Ok(PollBatch {
            last_id: self.baseline,
            notifications,
        })
    }

    /// Like [`poll_batch`](Self::poll_batch), rendered as JSON.
    ///
    /// ```
    /// let chime = chime::Chime::new();
    /// chime.producer().record("a.wav", None).unwrap();
    /// let json = chime.poller().poll_json().unwrap();
    /// assert_eq!(json, r#"{"lastId":1,"notifications":[{"id":1,"soundRef":"a.wav","details":null}]}"#);
    /// ```
    pub fn poll_json(&mut self) -> Result<String> {
        Ok(serde_json::to_string(&self.poll_batch()?)?)
    }
}
