//! # Domain Layer
//!
//! Pure protocol logic with no I/O dependencies.

pub mod challenge;
pub mod config;
pub mod ecdsa;
pub mod entities;
pub mod errors;
