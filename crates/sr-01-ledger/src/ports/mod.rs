//! # Ports Layer
//!
//! - **Inbound (Driving)**: `LedgerApi`, what callers use
//! - **Outbound (Driven)**: `TimeSource`, what the ledger needs

pub mod inbound;
pub mod outbound;
