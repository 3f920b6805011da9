//! Configuration for a [`Chime`](crate::Chime) instance.
//!
//! Configuration can be assembled through [`ChimeBuilder`](crate::ChimeBuilder)
//! or loaded from JSON:
//!
//! ```
//! use chime::ChimeConfig;
//!
//! let config = ChimeConfig::from_json(r#"{
//!     "first_id": 1,
//!     "lock_timeout_ms": 250,
//!     "retention": { "KeepLast": 50 }
//! }"#).unwrap();
//! assert_eq!(config.lock_timeout_ms, Some(250));
//! ```

use crate::error::{Error, Result};
use chime_store::{LockWait, RetentionPolicy, StoreConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Serializable Chime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChimeConfig {
    /// Identifier for the first notification (at least 1)
    pub first_id: u64,
    /// Maximum wait for the store lock; `None` blocks indefinitely
    pub lock_timeout_ms: Option<u64>,
    /// Policy applied by [`Retention::sweep`](crate::Retention::sweep)
    pub retention: RetentionPolicy,
}

impl ChimeConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ChimeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the store cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.first_id == 0 {
            return Err(Error::Config("first_id must be at least 1".to_string()));
        }
        if self.lock_timeout_ms == Some(0) {
            return Err(Error::Config(
                "lock_timeout_ms must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn store_config(&self) -> StoreConfig {
        StoreConfig {
            first_id: self.first_id,
            lock_wait: match self.lock_timeout_ms {
                Some(ms) => LockWait::Bounded(Duration::from_millis(ms)),
                None => LockWait::Blocking,
            },
        }
    }
}

impl Default for ChimeConfig {
    fn default() -> Self {
        Self {
            first_id: 1,
            lock_timeout_ms: None,
            retention: RetentionPolicy::KeepAll,
        }
    }
}
