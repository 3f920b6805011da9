//! Notification store
//!
//! One component fills four roles over a single ordered structure:
//! 1. Identifier factory: hands out strictly increasing identifiers
//! 2. Ordered index: `index[i]` is always the identifier of `entries[i]`
//! 3. Repository: "everything newer than this cursor" queries
//! 4. Mutable container: cursor-driven removal passes
//!
//! ## Invariants
//!
//! - `index.len() == entries.len()` at all times
//! - `index` is strictly increasing (append order == identifier order)
//! - The sequence counter only moves forward, once per successful create
//!
//! ## Thread Safety
//!
//! Every operation runs under one `parking_lot::Mutex` scoped to the store:
//! the store behaves as a single monitor and operations are totally ordered
//! by their entry into the critical section. A removal pass holds the lock
//! for its whole duration, including however long the remover takes, so a
//! slow remover stalls every producer and poller until it returns.

use crate::config::{LockWait, StoreConfig};
use crate::cursor::{FnRemover, NotificationRemover, RemovalCursor, RemovalReport};
use chime_core::{Notification, NotificationId, Result, StoreError};
use chrono::Utc;
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, trace, warn};

/// State guarded by the store lock.
pub(crate) struct StoreInner {
    pub(crate) index: Vec<NotificationId>,
    pub(crate) entries: Vec<Notification>,
    /// `None` once `u64::MAX` has been handed out.
    next_id: Option<u64>,
    created: u64,
    removed: u64,
}

impl StoreInner {
    pub(crate) fn new(first_id: u64) -> Self {
        Self {
            index: Vec::new(),
            entries: Vec::new(),
            next_id: Some(first_id),
            created: 0,
            removed: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    /// Assign the next identifier and append at the tail.
    pub(crate) fn append(&mut self, sound_ref: &str, details: Option<&str>) -> Result<Notification> {
        let raw = self.next_id.ok_or_else(|| {
            StoreError::IllegalState("notification identifier space exhausted".to_string())
        })?;
        let id = NotificationId::new(raw);

        let notification = Notification::new(
            id,
            sound_ref,
            details.map(str::to_string),
            Utc::now(),
        );

        self.next_id = raw.checked_add(1);
        self.index.push(id);
        self.entries.push(notification.clone());
        self.created += 1;
        Ok(notification)
    }

    /// First slot whose identifier is strictly greater than `cursor`.
    ///
    /// Upper-bound search over the strictly increasing index. The result is
    /// the same whether or not `cursor` itself is still stored.
    pub(crate) fn first_newer_than(&self, cursor: NotificationId) -> usize {
        self.index.partition_point(|id| *id <= cursor)
    }

    /// Detach the pair at `slot` from both sequences.
    pub(crate) fn detach(&mut self, slot: usize) -> Notification {
        self.index.remove(slot);
        self.removed += 1;
        self.entries.remove(slot)
    }
}

/// Point-in-time counters for a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreMetrics {
    /// Notifications currently held
    pub live: usize,
    /// Notifications ever created by this store
    pub created: u64,
    /// Notifications ever removed by removal passes
    pub removed: u64,
    /// Identifier the next create will receive, `None` once exhausted
    pub next_id: Option<u64>,
}

/// In-process, ordered, append-only notification log.
///
/// # Example
///
/// ```
/// use chime_store::NotificationStore;
///
/// let store = NotificationStore::new();
/// let first = store.create_and_append("a.wav", Some("build1")).unwrap();
/// let second = store.create_and_append("b.wav", None).unwrap();
///
/// assert_eq!(store.last_id().unwrap(), Some(second.id()));
/// let newer = store.find_newer_than(Some(first.id())).unwrap();
/// assert_eq!(newer, vec![second]);
/// ```
pub struct NotificationStore {
    inner: Mutex<StoreInner>,
    lock_wait: LockWait,
}

impl NotificationStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(StoreConfig::default())
    }

    /// Create an empty store from a configuration.
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: StoreConfig) -> Self {
        Self {
            inner: Mutex::new(StoreInner::new(config.first_id)),
            lock_wait: config.lock_wait,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        match self.lock_wait {
            LockWait::Blocking => Ok(self.inner.lock()),
            LockWait::Bounded(timeout) => self.inner.try_lock_for(timeout).ok_or_else(|| {
                warn!(
                    timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                    "Store lock wait timed out"
                );
                StoreError::LockTimeout(timeout)
            }),
        }
    }

    /// Create a notification and append it to the log.
    ///
    /// Identifier assignment and append happen atomically, so concurrent
    /// callers receive identifiers in the order they enter the critical
    /// section and the log order always matches identifier order.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `sound_ref` is empty. The counter is untouched.
    pub fn create_and_append(&self, sound_ref: &str, details: Option<&str>) -> Result<Notification> {
        if sound_ref.is_empty() {
            return Err(StoreError::InvalidArgument(
                "sound_ref is required".to_string(),
            ));
        }

        let notification = self.lock()?.append(sound_ref, details)?;
        debug!(id = %notification.id(), sound_ref, "Appended notification");
        Ok(notification)
    }

    /// Identifier of the newest notification, or `None` when empty.
    pub fn last_id(&self) -> Result<Option<NotificationId>> {
        Ok(self.lock()?.index.last().copied())
    }

    /// All notifications strictly newer than `cursor`, oldest first.
    ///
    /// `None` returns everything. The result is an independent copy; later
    /// mutation of the store does not affect it. A cursor at or beyond the
    /// newest identifier yields an empty vector.
    pub fn find_newer_than(&self, cursor: Option<NotificationId>) -> Result<Vec<Notification>> {
        let inner = self.lock()?;
        let from = match cursor {
            Some(id) => inner.first_newer_than(id),
            None => 0,
        };
        let newer = inner.entries[from..].to_vec();
        trace!(cursor = ?cursor.map(NotificationId::as_u64), count = newer.len(), "Queried newer notifications");
        Ok(newer)
    }

    /// Run a removal pass.
    ///
    /// The remover receives a cursor over the live sequence and may detach
    /// any element it visits. The store lock is held for the entire pass.
    ///
    /// If the remover returns an error the pass stops there: notifications
    /// already removed stay removed, the lock is released and the error is
    /// returned. A panicking remover likewise leaves the store in the state
    /// after its last completed removal.
    pub fn remove_where<R>(&self, remover: &mut R) -> Result<RemovalReport>
    where
        R: NotificationRemover + ?Sized,
    {
        let mut inner = self.lock()?;
        let mut cursor = RemovalCursor::new(&mut *inner);
        let outcome = remover.remove(&mut cursor);
        let report = cursor.report();

        match outcome {
            Ok(()) => {
                debug!(visited = report.visited, removed = report.removed, "Removal pass complete");
                Ok(report)
            }
            Err(e) => {
                warn!(
                    visited = report.visited,
                    removed = report.removed,
                    error = %e,
                    "Removal pass aborted by remover"
                );
                Err(e)
            }
        }
    }

    /// Run a removal pass driven by a closure.
    pub fn remove_with<F>(&self, f: F) -> Result<RemovalReport>
    where
        F: FnMut(&mut RemovalCursor<'_>) -> Result<()>,
    {
        self.remove_where(&mut FnRemover(f))
    }

    /// Keep only notifications for which `keep` returns true.
    pub fn retain<F>(&self, mut keep: F) -> Result<RemovalReport>
    where
        F: FnMut(&Notification) -> bool,
    {
        self.remove_with(|cursor| {
            while let Some(notification) = cursor.advance()? {
                if !keep(notification) {
                    cursor.remove_current()?;
                }
            }
            Ok(())
        })
    }

    /// Number of notifications currently held.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether the store holds no notifications.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Snapshot of the store's counters.
    pub fn metrics(&self) -> Result<StoreMetrics> {
        let inner = self.lock()?;
        Ok(StoreMetrics {
            live: inner.len(),
            created: inner.created,
            removed: inner.removed,
            next_id: inner.next_id,
        })
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationStore")
            .field("lock_wait", &self.lock_wait)
            .finish_non_exhaustive()
    }
}
