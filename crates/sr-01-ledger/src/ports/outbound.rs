//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies injected into the ledger.

use crate::domain::entities::Timestamp;
use std::sync::Arc;

/// Source of seal timestamps.
///
/// Abstracted so tests can drive the clock.
pub trait TimeSource: Send + Sync {
    /// Current Unix time in seconds.
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
