//! Ownership protocol configuration with validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default timelock window: five minutes.
pub const DEFAULT_CHALLENGE_WINDOW_SECS: u64 = 300;

/// Ownership protocol configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnershipConfig {
    /// A challenge is rejected once this many seconds have passed since issue
    pub challenge_window_secs: u64,
    /// Tolerated amount by which a challenge's issue time may lead our clock
    pub max_clock_skew_secs: u64,
}

impl Default for OwnershipConfig {
    fn default() -> Self {
        Self {
            challenge_window_secs: DEFAULT_CHALLENGE_WINDOW_SECS,
            max_clock_skew_secs: 0,
        }
    }
}

impl OwnershipConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.challenge_window_secs == 0 {
            return Err(ConfigError::ZeroChallengeWindow);
        }
        if self.max_clock_skew_secs >= self.challenge_window_secs {
            return Err(ConfigError::SkewExceedsWindow {
                skew: self.max_clock_skew_secs,
                window: self.challenge_window_secs,
            });
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("challenge_window_secs cannot be 0")]
    ZeroChallengeWindow,

    #[error("max_clock_skew_secs ({skew}) must be smaller than challenge_window_secs ({window})")]
    SkewExceedsWindow { skew: u64, window: u64 },
}
