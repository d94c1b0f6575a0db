//! # ECDSA Verification (secp256k1, EIP-191)
//!
//! Verifies `personal_sign` signatures: the signer hashes
//! `"\x19Ethereum Signed Message:\n" || len(message) || message` with
//! keccak256 and signs the digest with a recoverable secp256k1 signature.
//! Ownership holds when the address recovered from the signature equals
//! the claimed address.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: S must be in the lower half of the curve order
//! - Uses k256 crate for cryptographic operations

use super::entities::{Address, RecoverableSignature};
use super::errors::SignatureError;
use crate::ports::outbound::MessageVerifier;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};
use sr_01_ledger::Hash;

/// EIP-191 prefix for personal messages.
const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// `personal_sign` verifier for `0x` addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip191Verifier;

impl Eip191Verifier {
    pub fn new() -> Self {
        Self
    }
}

impl MessageVerifier for Eip191Verifier {
    fn verify(&self, address: &str, message: &str, signature: &str) -> Result<(), SignatureError> {
        let expected: Address = address.parse()?;
        let signature: RecoverableSignature = signature.parse()?;

        let actual = recover_address(&eip191_hash(message.as_bytes()), &signature)?;
        if actual != expected {
            return Err(SignatureError::SignerMismatch { expected, actual });
        }
        Ok(())
    }

    /// Lowercase `0x` form; unparseable input is kept as given.
    fn canonical_address(&self, address: &str) -> String {
        address
            .parse::<Address>()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| address.to_string())
    }
}

/// Digest signed by `personal_sign`.
pub fn eip191_hash(message: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_PREFIX.as_bytes());
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}

/// Recover the signer's address from a signature over `message_hash`.
///
/// Rejects high-S signatures before attempting recovery.
pub fn recover_address(
    message_hash: &Hash,
    signature: &RecoverableSignature,
) -> Result<Address, SignatureError> {
    let recovery_id = parse_recovery_id(signature.v)?;

    let sig = Signature::from_slice(&signature.rs_bytes())
        .map_err(|_| SignatureError::InvalidFormat)?;

    // normalize_s yields Some only when S was in the upper half
    if sig.normalize_s().is_some() {
        return Err(SignatureError::MalleableSignature);
    }

    let recovered_key = VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Derive Ethereum address from public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);

    // Keccak256 hash of public key (without 0x04 prefix)
    let hash = keccak256(&pubkey_bytes.as_bytes()[1..]);

    // Take last 20 bytes as address
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Address(address)
}

/// Parse recovery ID from v value.
///
/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    RecoveryId::from_byte(id).ok_or(SignatureError::InvalidRecoveryId(v))
}
