//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! - `container/` - Configuration and the service container
//! - `runtime` - Startup and shutdown of the node

#![allow(missing_docs)]

pub mod container;
pub mod runtime;

pub use container::{ConfigError, NodeConfig, ServiceContainer};
pub use runtime::NodeRuntime;
