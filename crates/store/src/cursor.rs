//! Removal cursor
//!
//! A removal pass hands a [`NotificationRemover`] a [`RemovalCursor`] over the
//! live notification sequence. The cursor walks forward in identifier order
//! and can detach the element it is positioned on.
//!
//! ## State Machine
//!
//! ```text
//! BeforeFirst --advance--> Positioned --remove_current--> Removed
//!      |                    |   ^                            |
//!      |                    |   +----------advance-----------+
//!      +----advance (end)---+----advance (end)---> Exhausted
//!
//! Exhausted --advance--> Err(NoMoreElements)
//! BeforeFirst / Removed / Exhausted --remove_current--> Err(IllegalState)
//! ```
//!
//! `pos` always names the slot of the next element to visit. Removing the
//! current element steps `pos` back by one, so the element that shifts into
//! the freed slot is the next one visited: nothing is skipped or revisited.

use crate::store::StoreInner;
use chime_core::{Notification, Result, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    BeforeFirst,
    Positioned,
    Removed,
    Exhausted,
}

/// Forward cursor over the live notification sequence.
///
/// Only obtainable inside [`NotificationStore::remove_where`], which holds the
/// store lock for the cursor's whole lifetime.
///
/// [`NotificationStore::remove_where`]: crate::NotificationStore::remove_where
pub struct RemovalCursor<'a> {
    inner: &'a mut StoreInner,
    pos: usize,
    state: CursorState,
    visited: usize,
    removed: usize,
}

impl<'a> RemovalCursor<'a> {
    pub(crate) fn new(inner: &'a mut StoreInner) -> Self {
        Self {
            inner,
            pos: 0,
            state: CursorState::BeforeFirst,
            visited: 0,
            removed: 0,
        }
    }

    /// Move to the next notification.
    ///
    /// Returns `Ok(None)` once, when the end of the sequence is reached.
    /// Advancing again after that fails with [`StoreError::NoMoreElements`].
    pub fn advance(&mut self) -> Result<Option<&Notification>> {
        if self.state == CursorState::Exhausted {
            return Err(StoreError::NoMoreElements);
        }
        if self.pos >= self.inner.len() {
            self.state = CursorState::Exhausted;
            return Ok(None);
        }

        let slot = self.pos;
        self.pos += 1;
        self.visited += 1;
        self.state = CursorState::Positioned;
        Ok(self.inner.entries.get(slot))
    }

    /// Detach the notification the cursor is positioned on.
    ///
    /// The identifier and the notification leave the store together. Returns
    /// the detached notification.
    pub fn remove_current(&mut self) -> Result<Notification> {
        match self.state {
            CursorState::Positioned => {}
            CursorState::BeforeFirst => {
                return Err(StoreError::IllegalState(
                    "remove_current called before advance".to_string(),
                ))
            }
            CursorState::Removed => {
                return Err(StoreError::IllegalState(
                    "current notification already removed".to_string(),
                ))
            }
            CursorState::Exhausted => {
                return Err(StoreError::IllegalState(
                    "cursor is exhausted".to_string(),
                ))
            }
        }

        self.pos -= 1;
        let detached = self.inner.detach(self.pos);
        self.removed += 1;
        self.state = CursorState::Removed;
        Ok(detached)
    }

    /// Whether another call to [`advance`](Self::advance) would yield a notification.
    pub fn has_next(&self) -> bool {
        self.state != CursorState::Exhausted && self.pos < self.inner.len()
    }

    /// Number of notifications currently live in the store.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the store is currently empty.
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Notifications visited so far in this pass.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Notifications removed so far in this pass.
    pub fn removed(&self) -> usize {
        self.removed
    }

    pub(crate) fn report(&self) -> RemovalReport {
        RemovalReport {
            visited: self.visited,
            removed: self.removed,
        }
    }
}

/// Outcome of a completed removal pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemovalReport {
    /// Notifications the remover advanced onto
    pub visited: usize,
    /// Notifications detached from the store
    pub removed: usize,
}

/// Drives a removal pass.
///
/// Implementors decide which notifications to detach by walking the cursor.
/// Returning an error ends the pass early; removals already made are kept.
pub trait NotificationRemover {
    /// Visit the store through `cursor`, removing whatever should go.
    fn remove(&mut self, cursor: &mut RemovalCursor<'_>) -> Result<()>;
}

impl<R: NotificationRemover + ?Sized> NotificationRemover for Box<R> {
    fn remove(&mut self, cursor: &mut RemovalCursor<'_>) -> Result<()> {
        (**self).remove(cursor)
    }
}

/// Adapter that lets a closure act as a remover.
pub(crate) struct FnRemover<F>(pub(crate) F);

impl<F> NotificationRemover for FnRemover<F>
where
    F: FnMut(&mut RemovalCursor<'_>) -> Result<()>,
{
    fn remove(&mut self, cursor: &mut RemovalCursor<'_>) -> Result<()> {
        (self.0)(cursor)
    }
}
