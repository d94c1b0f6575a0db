//! # Ledger Engine (sr-01)
//!
//! The authoritative, in-memory, append-only record of the star registry.
//! Blocks are sealed with a SHA-256 content hash, linked to their
//! predecessor, and re-validated as a whole after every append.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Genesis First | Block 0 exists from construction onwards |
//! | 2 | Height Continuity | `blocks[i].height == i` |
//! | 3 | Hash Linkage | `blocks[i].previous_block_hash == blocks[i-1].hash` |
//! | 4 | Seal Once | A block hash is computed once, at seal time |
//! | 5 | Atomic Append | Height check, seal and push run under one write lock |
//! | 6 | No Rollback | Validation failures are reported, never repaired |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Blocks, record codec, chain validator, errors
//! - `ports/` - Inbound API (`LedgerApi`) and outbound SPI (`TimeSource`)
//! - `adapters/` - System clock
//! - `service.rs` - `Ledger`, the lock-guarded chain owner
//!
//! ## Usage
//!
//! ```ignore
//! use sr_01_ledger::{Ledger, LedgerApi, StarRecord};
//!
//! let ledger = Ledger::new();
//! assert_eq!(ledger.current_height(), 0);
//!
//! let record = StarRecord::new("0xabc...", serde_json::json!({"ra": "16h 29m"}));
//! let block = ledger.append_record(&record)?;
//! assert!(ledger.validate().is_empty());
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export key types for convenience
pub use adapters::time::SystemTimeSource;
pub use domain::codec::{decode, decode_as, encode};
pub use domain::entities::{content_hash, Block, Hash, StarRecord, Timestamp, GENESIS_MARKER};
pub use domain::errors::{AppendError, CodecError, LedgerError};
pub use domain::validator::{validate_chain, ValidationFinding};
pub use ports::inbound::LedgerApi;
pub use ports::outbound::TimeSource;
pub use service::Ledger;
