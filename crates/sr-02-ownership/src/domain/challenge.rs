//! # Ownership Challenge
//!
//! `"<address>:<issueEpochSeconds>:starRegistry"`
//!
//! Challenges are never stored. At submission the issue time is parsed back
//! out of the string and checked against the timelock window; the signature
//! over the exact string is what binds it to the address.

use super::config::OwnershipConfig;
use super::errors::OwnershipError;
use sr_01_ledger::Timestamp;
use std::fmt;

/// Fixed trailing component of every challenge.
pub const CHALLENGE_SUFFIX: &str = "starRegistry";

/// A parsed challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub address: String,
    pub issued_at: Timestamp,
}

impl Challenge {
    pub fn new(address: impl Into<String>, issued_at: Timestamp) -> Self {
        Self {
            address: address.into(),
            issued_at,
        }
    }

    /// Parse a challenge string.
    ///
    /// Splits from the right so the address part is taken verbatim.
    pub fn parse(raw: &str) -> Result<Self, OwnershipError> {
        let malformed = || OwnershipError::MalformedChallenge(raw.to_string());

        let mut parts = raw.rsplitn(3, ':');
        let suffix = parts.next().ok_or_else(malformed)?;
        let issued_at = parts.next().ok_or_else(malformed)?;
        let address = parts.next().ok_or_else(malformed)?;

        if suffix != CHALLENGE_SUFFIX {
            return Err(malformed());
        }
        let issued_at = issued_at.parse::<Timestamp>().map_err(|_| malformed())?;

        Ok(Self::new(address, issued_at))
    }

    /// Check the timelock at `now`.
    ///
    /// Expired once `now - issued_at >= window`. An issue time ahead of
    /// `now` is tolerated up to the configured clock skew.
    pub fn check_fresh(&self, now: Timestamp, config: &OwnershipConfig) -> Result<(), OwnershipError> {
        if self.issued_at > now {
            if self.issued_at - now > config.max_clock_skew_secs {
                return Err(OwnershipError::ChallengeFromFuture {
                    issued_at: self.issued_at,
                    now,
                });
            }
            return Ok(());
        }

        let elapsed_secs = now - self.issued_at;
        if elapsed_secs >= config.challenge_window_secs {
            return Err(OwnershipError::ExpiredChallenge {
                elapsed_secs,
                window_secs: config.challenge_window_secs,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.address, self.issued_at, CHALLENGE_SUFFIX)
    }
}
