//! # Chime
//!
//! In-process, ordered, append-only log of audio notifications.
//!
//! Build-event observers record a notification (a sound reference plus
//! optional build details); client-facing endpoints poll for everything
//! newer than the last identifier they saw; retention jobs prune the log
//! through cursor-driven removal passes.
//!
//! ## Quick Start
//!
//! ```
//! use chime::prelude::*;
//!
//! let chime = Chime::new();
//!
//! // Record
//! chime.producer().record("a.wav", Some("build1"))?;
//! chime.producer().record("b.wav", None)?;
//!
//! // Poll
//! let mut poller = chime.poller();
//! assert_eq!(poller.poll()?.len(), 2);
//!
//! // Prune
//! chime.retention().sweep_with(&RetentionPolicy::KeepLast(1), chrono::Utc::now())?;
//! assert_eq!(chime.store().len()?, 1);
//! # Ok::<(), chime::Error>(())
//! ```
//!
//! ## Collaborators
//!
//! - [`Producer`] - Records notifications
//! - [`Poller`] - Fetches notifications newer than a baseline
//! - [`Retention`] - Removes notifications via removal passes

#![warn(missing_docs)]

mod chime;
mod collaborators;
mod config;
mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use chime::{Chime, ChimeBuilder};
pub use config::ChimeConfig;
pub use error::{Error, Result};

// Re-export collaborators
pub use collaborators::{NotificationView, PollBatch, Poller, Producer, Retention};

// Re-export types
pub use types::*;
