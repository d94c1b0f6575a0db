//! # Ownership Verification (sr-02)
//!
//! Gates every ledger append behind proof of key ownership.
//!
//! ## Protocol
//!
//! ```text
//! client                              registry
//!   │ ── request_challenge(addr) ──────→ │  "<addr>:<now>:starRegistry"
//!   │ ←──────────────────── challenge ── │  (not stored)
//!   │
//!   │  personal_sign(challenge) with addr's key
//!   │
//!   │ ── submit_record(addr, challenge, ─→ │  1. parse issue time
//!   │        signature, star)             │  2. elapsed < window?
//!   │                                     │  3. signer == addr?
//!   │ ←──────────────── sealed Block ──── │  4. ledger.append({owner, star})
//! ```
//!
//! Challenges are stateless: validity is re-derived from the embedded
//! timestamp at submission, so any number of challenges per address can be
//! outstanding at once.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): challenge format, EIP-191 recovery, errors
//! - **Ports Layer** (`ports/`): `StarRegistryApi` (inbound), `MessageVerifier` (outbound)
//! - **Service Layer** (`service.rs`): `StarRegistryService`, the facade over the ledger
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: high-S signatures are rejected
//! - **Timelock**: challenges expire `challenge_window_secs` after issue

pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export public API
pub use domain::challenge::{Challenge, CHALLENGE_SUFFIX};
pub use domain::config::{ConfigError, OwnershipConfig};
pub use domain::ecdsa::{
    address_from_pubkey, eip191_hash, keccak256, recover_address, Eip191Verifier,
};
pub use domain::entities::{Address, RecordSubmission, RecoverableSignature};
pub use domain::errors::{OwnershipError, SignatureError};
pub use ports::inbound::StarRegistryApi;
pub use ports::outbound::MessageVerifier;
pub use service::StarRegistryService;
