//! Convenient imports for Chime.
//!
//! ```
//! use chime::prelude::*;
//!
//! let chime = Chime::new();
//! chime.producer().record("a.wav", None).unwrap();
//! ```

// Main entry point
pub use crate::chime::{Chime, ChimeBuilder};
pub use crate::config::ChimeConfig;

// Error handling
pub use crate::error::{Error, Result};

// Collaborators
pub use crate::collaborators::{NotificationView, Poller, Producer, Retention};

// Core types
pub use crate::types::{Notification, NotificationId, RetentionPolicy};

// Removal protocol
pub use crate::types::{NotificationRemover, RemovalCursor, RemovalReport};
