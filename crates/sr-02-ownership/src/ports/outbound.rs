//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies the ownership protocol needs besides the ledger itself.

use crate::domain::errors::SignatureError;

/// Verifies that `signature` signs `message` with the key behind `address`.
///
/// Implementations pick the signing scheme from the address format and
/// return `UnsupportedAddress` for formats they do not know.
pub trait MessageVerifier: Send + Sync {
    fn verify(&self, address: &str, message: &str, signature: &str) -> Result<(), SignatureError>;

    /// The form `address` is stored and queried under. Spellings the
    /// verifier treats as the same key must map to the same string.
    fn canonical_address(&self, address: &str) -> String {
        address.to_string()
    }
}
