//! Collaborators built on top of the notification store.
//!
//! Each collaborator owns a handle to the shared store and covers one role:
//!
//! 1. **Producer** - records a notification when a build event warrants one
//! 2. **Poller** - tracks a baseline and fetches everything newer than it
//! 3. **Retention** - prunes the log through removal passes

mod poller;
mod producer;
mod retention;

pub use poller::{NotificationView, PollBatch, Poller};
pub use producer::Producer;
pub use retention::Retention;
