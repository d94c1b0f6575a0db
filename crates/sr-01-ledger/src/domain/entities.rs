//! # Domain Entities
//!
//! Core data structures of the ledger.
//!
//! A `Block` is created only through [`Block::seal`], which is the single
//! place a block hash is computed. Once a block is pushed onto the ledger
//! the ledger only ever hands out clones, so the sealed copy cannot be
//! changed from outside.

use crate::domain::codec;
use crate::domain::errors::CodecError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{hex::Hex, serde_as};
use sha2::{Digest, Sha256};

/// SHA-256 digest.
pub type Hash = [u8; 32];

/// Unix timestamp in seconds since epoch.
pub type Timestamp = u64;

/// Marker carried by the genesis block body.
pub const GENESIS_MARKER: &str = "Genesis Block";

/// A sealed ledger block.
///
/// JSON shape matches what registry clients expect:
/// `{"hash", "height", "body", "time", "previousBlockHash"}` with hashes as
/// lowercase hex.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Content hash over (height, previous hash, time, body).
    #[serde_as(as = "Hex")]
    pub hash: Hash,
    /// Position in the chain, starting at 0.
    pub height: u64,
    /// Encoded payload (see [`codec`]).
    pub body: String,
    /// Seal time.
    pub time: Timestamp,
    /// Hash of the block at `height - 1`; `None` for genesis.
    #[serde_as(as = "Option<Hex>")]
    pub previous_block_hash: Option<Hash>,
}

impl Block {
    /// Seal a new block, computing its content hash.
    pub fn seal(
        height: u64,
        previous_block_hash: Option<Hash>,
        time: Timestamp,
        body: String,
    ) -> Self {
        let hash = content_hash(height, previous_block_hash.as_ref(), time, &body);
        Self {
            hash,
            height,
            body,
            time,
            previous_block_hash,
        }
    }

    /// Recompute the content hash from the current field values.
    pub fn recompute_hash(&self) -> Hash {
        content_hash(
            self.height,
            self.previous_block_hash.as_ref(),
            self.time,
            &self.body,
        )
    }

    /// Whether this block sits at height 0.
    pub fn is_genesis(&self) -> bool {
        self.height == 0
    }

    /// Lowercase hex form of the block hash.
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

/// Content hash over a block's fields, excluding the hash itself.
///
/// Variable-length and optional fields are framed so distinct field tuples
/// never produce the same byte stream.
pub fn content_hash(
    height: u64,
    previous_block_hash: Option<&Hash>,
    time: Timestamp,
    body: &str,
) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(height.to_le_bytes());
    match previous_block_hash {
        Some(prev) => {
            hasher.update([1u8]);
            hasher.update(prev);
        }
        None => hasher.update([0u8]),
    }
    hasher.update(time.to_le_bytes());
    hasher.update((body.len() as u64).to_le_bytes());
    hasher.update(body.as_bytes());
    hasher.finalize().into()
}

/// Body of every non-genesis block: who registered the star, and the star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Wallet address that proved ownership at submission time.
    pub owner: String,
    /// Caller-defined star data.
    pub star: Value,
}

impl StarRecord {
    pub fn new(owner: impl Into<String>, star: Value) -> Self {
        Self {
            owner: owner.into(),
            star,
        }
    }

    /// JSON form of the record. Infallible.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("owner".to_string(), Value::String(self.owner.clone()));
        map.insert("star".to_string(), self.star.clone());
        Value::Object(map)
    }

    /// Encode into a block body.
    pub fn encode(&self) -> String {
        codec::encode(&self.to_value())
    }

    /// Decode from a block body.
    pub fn decode(body: &str) -> Result<Self, CodecError> {
        codec::decode_as(body)
    }
}

/// Encoded body of the genesis block.
pub fn genesis_body() -> String {
    let mut map = Map::new();
    map.insert("data".to_string(), Value::String(GENESIS_MARKER.to_string()));
    codec::encode(&Value::Object(map))
}
