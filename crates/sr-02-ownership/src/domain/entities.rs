//! # Domain Entities
//!
//! Core data structures for ownership verification.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// `0x` or `0X`.
fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

/// Ethereum-style address (last 20 bytes of keccak256(pubkey)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 20]);

impl FromStr for Address {
    type Err = SignatureError;

    /// Parses `0x` followed by 40 hex digits, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_hex_prefix(s)
            .ok_or_else(|| SignatureError::UnsupportedAddress(s.to_string()))?;

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| SignatureError::UnsupportedAddress(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Recoverable secp256k1 signature as produced by `personal_sign`.
///
/// Wire format: 65 bytes `r || s || v`, hex, optional `0x` prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl RecoverableSignature {
    /// The 64-byte `r || s` form.
    pub fn rs_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..].copy_from_slice(&self.s);
        bytes
    }

    /// Hex wire form, `0x`-prefixed.
    pub fn to_hex(&self) -> String {
        let mut bytes = Vec::with_capacity(65);
        bytes.extend_from_slice(&self.r);
        bytes.extend_from_slice(&self.s);
        bytes.push(self.v);
        format!("0x{}", hex::encode(bytes))
    }
}

impl FromStr for RecoverableSignature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_hex_prefix(s).unwrap_or(s);
        let mut bytes = [0u8; 65];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| SignatureError::InvalidFormat)?;

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }
}

/// A caller's request to register a star.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordSubmission {
    /// Claimed owner address.
    pub address: String,
    /// Challenge previously issued for `address`, verbatim.
    pub challenge: String,
    /// Signature over `challenge` by `address`'s key.
    pub signature: String,
    /// Caller-defined star data.
    pub star: Value,
}
