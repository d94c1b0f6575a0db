//! # Adapters
//!
//! Production implementations of the outbound ports.

pub mod time;
