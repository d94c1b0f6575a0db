//! # Ports Layer
//!
//! - **Inbound (Driving)**: `StarRegistryApi`, the registry's external surface
//! - **Outbound (Driven)**: `MessageVerifier`, the signature scheme

pub mod inbound;
pub mod outbound;
