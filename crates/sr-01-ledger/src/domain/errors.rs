//! # Domain Errors
//!
//! Error types for the ledger.
//!
//! - `CodecError` is recoverable: readers skip undecodable bodies.
//! - `LedgerError` is a lookup miss, reported as "absent".
//! - `AppendError` is fatal to the append that produced it. The ledger has
//!   no rollback, so `ValidationFailed` means the committed chain is broken.

use crate::domain::entities::Hash;
use crate::domain::validator::ValidationFinding;
use thiserror::Error;

/// Malformed block body.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("body is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("body is not valid JSON for this payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lookup misses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Block not found: {}", hex::encode(.hash))]
    BlockNotFound { hash: Hash },

    #[error("No block at height {height}")]
    HeightNotFound { height: u64 },
}

/// Failures of [`crate::LedgerApi::append`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppendError {
    /// The chain length disagreed with the cached height.
    #[error("Height mismatch: expected chain length {expected_len}, found {actual_len}")]
    HeightMismatch { expected_len: u64, actual_len: u64 },

    /// The block was committed but the chain no longer validates.
    #[error("Chain failed validation after append ({} finding(s))", .0.len())]
    ValidationFailed(Vec<ValidationFinding>),
}
