//! # Domain Layer
//!
//! Pure ledger logic: no locks, no clocks.
//!
//! ## Modules
//!
//! - `entities` - Block, star record, content hashing
//! - `codec` - Hex-over-JSON body encoding
//! - `validator` - Chain integrity walk
//! - `errors` - Domain error types

pub mod codec;
pub mod entities;
pub mod errors;
pub mod validator;
