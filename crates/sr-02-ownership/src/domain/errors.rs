//! # Ownership Errors
//!
//! `SignatureError` describes why a signature did not verify. At the
//! protocol boundary every `SignatureError` collapses into
//! `OwnershipError::InvalidSignature`, keeping the detail as its source.

use super::entities::Address;
use sr_01_ledger::AppendError;
use thiserror::Error;

/// Errors that can occur during signature verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The address is not in a format this registry can verify
    #[error("Unsupported address format: {0:?}")]
    UnsupportedAddress(String),

    /// The signature format is invalid (wrong length, invalid encoding)
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer does not match expected signer
    #[error("Signer mismatch: expected {expected}, got {actual}")]
    SignerMismatch { expected: Address, actual: Address },
}

/// Rejections of a record submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OwnershipError {
    /// The challenge is not `<address>:<seconds>:starRegistry`
    #[error("Malformed challenge: {0:?}")]
    MalformedChallenge(String),

    /// The challenge is at least `window_secs` old
    #[error("Challenge expired: issued {elapsed_secs}s ago, window is {window_secs}s")]
    ExpiredChallenge { elapsed_secs: u64, window_secs: u64 },

    /// The challenge claims an issue time ahead of the registry clock
    #[error("Challenge issued in the future: {issued_at} > {now}")]
    ChallengeFromFuture { issued_at: u64, now: u64 },

    /// The signature does not prove ownership of the address
    #[error("Invalid signature: {0}")]
    InvalidSignature(#[source] SignatureError),

    /// Verification passed but the ledger refused the block
    #[error(transparent)]
    Append(#[from] AppendError),
}
