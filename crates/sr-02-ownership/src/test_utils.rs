//! Signing fixtures: the wallet side of the protocol, for tests only.

use crate::domain::ecdsa::{address_from_pubkey, eip191_hash};
use crate::domain::entities::RecoverableSignature;
use k256::ecdsa::{RecoveryId, SigningKey};
use sr_01_ledger::Hash;

pub use sr_01_ledger::test_utils::ManualTimeSource;

/// secp256k1 curve order n
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Generate a fresh wallet key.
pub fn generate_signing_key() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

/// `0x`-prefixed lowercase address of `key`.
pub fn address_of(key: &SigningKey) -> String {
    address_from_pubkey(key.verifying_key()).to_string()
}

/// Sign a digest, normalized to low S with v in {27, 28}.
pub fn sign_prehash(key: &SigningKey, message_hash: &Hash) -> RecoverableSignature {
    let (sig, recid) = key
        .sign_prehash_recoverable(message_hash)
        .expect("signing failed");

    // Normalize S to low value (EIP-2), flipping the y parity with it
    let (sig, recid) = match sig.normalize_s() {
        Some(low) => (low, RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced())),
        None => (sig, recid),
    };

    let sig_bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig_bytes[..32]);
    s.copy_from_slice(&sig_bytes[32..]);

    RecoverableSignature {
        r,
        s,
        v: recid.to_byte() + 27,
    }
}

/// What a wallet's `personal_sign(message)` returns.
pub fn sign_personal_message(key: &SigningKey, message: &str) -> String {
    sign_prehash(key, &eip191_hash(message.as_bytes())).to_hex()
}

/// Invert S value for malleability testing: s' = n - s
pub fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;

    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (s[i] as i32) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }

    result
}
