//! # Chain Integrity Validator
//!
//! Walks a block sequence and reports every discrepancy it finds. The walk
//! never stops at the first finding and never mutates the chain.
//!
//! Checks, per block:
//!
//! | Check | Finding |
//! |-------|---------|
//! | genesis has height 0 and no predecessor | `MalformedGenesis` |
//! | `height == prev.height + 1` | `HeightDiscontinuity` |
//! | `previous_block_hash == prev.hash` | `BrokenLink` |
//! | stored hash == recomputed hash | `Tampered` |

use crate::domain::entities::{Block, Hash};
use serde::Serialize;
use serde_with::{hex::Hex, serde_as};
use thiserror::Error;

/// A single chain-integrity discrepancy.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationFinding {
    #[error("Genesis block must have height 0 and no previous hash")]
    MalformedGenesis,

    #[error("Block at index {index} has height {found}, expected {expected}")]
    HeightDiscontinuity { index: u64, expected: u64, found: u64 },

    #[error("Block {height} does not link to its predecessor")]
    BrokenLink {
        height: u64,
        #[serde_as(as = "Hex")]
        expected: Hash,
        #[serde_as(as = "Option<Hex>")]
        found: Option<Hash>,
    },

    #[error("Block {height} content does not match its hash")]
    Tampered {
        height: u64,
        #[serde_as(as = "Hex")]
        stored: Hash,
        #[serde_as(as = "Hex")]
        computed: Hash,
    },
}

impl ValidationFinding {
    /// Height of the offending block, where one is named.
    pub fn height(&self) -> Option<u64> {
        match self {
            Self::MalformedGenesis => Some(0),
            Self::HeightDiscontinuity { index, .. } => Some(*index),
            Self::BrokenLink { height, .. } | Self::Tampered { height, .. } => Some(*height),
        }
    }
}

/// Validate a full block sequence. Empty result means the chain is sound.
pub fn validate_chain(blocks: &[Block]) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    let Some(genesis) = blocks.first() else {
        return findings;
    };

    if genesis.height != 0 || genesis.previous_block_hash.is_some() {
        findings.push(ValidationFinding::MalformedGenesis);
    }
    check_content(genesis, &mut findings);

    for (index, pair) in blocks.windows(2).enumerate() {
        let (prev, block) = (&pair[0], &pair[1]);
        let index = index as u64 + 1;

        // A predecessor at u64::MAX has no valid successor height
        match prev.height.checked_add(1) {
            Some(expected) if expected == block.height => {}
            expected => findings.push(ValidationFinding::HeightDiscontinuity {
                index,
                expected: expected.unwrap_or(index),
                found: block.height,
            }),
        }

        if block.previous_block_hash != Some(prev.hash) {
            findings.push(ValidationFinding::BrokenLink {
                height: block.height,
                expected: prev.hash,
                found: block.previous_block_hash,
            });
        }

        check_content(block, &mut findings);
    }

    findings
}

fn check_content(block: &Block, findings: &mut Vec<ValidationFinding>) {
    let computed = block.recompute_hash();
    if computed != block.hash {
        findings.push(ValidationFinding::Tampered {
            height: block.height,
            stored: block.hash,
            computed,
        });
    }
}
