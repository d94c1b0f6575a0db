// Allow missing docs for internal items in development
#![allow(missing_docs)]

//! SR-03 API Gateway - HTTP/JSON interface to the star registry.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 API GATEWAY (sr-03)                   │
//! ├──────────────────────────────────────────────────────┤
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │            HTTP (axum)  Port 8000              │  │
//! │  └───────────────────────┬────────────────────────┘  │
//! │  ┌───────────────────────┴────────────────────────┐  │
//! │  │        Middleware Stack: Cors → Trace          │  │
//! │  └───────────────────────┬────────────────────────┘  │
//! │  ┌───────────────────────┴────────────────────────┐  │
//! │  │     Router: JSON bodies ↔ StarRegistryApi      │  │
//! │  └───────────────────────┬────────────────────────┘  │
//! └──────────────────────────┼───────────────────────────┘
//!                            ▼
//!                 sr-02-ownership → sr-01-ledger
//! ```
//!
//! # Routes
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET  | `/height` | `{"height": n}` |
//! | POST | `/requestValidation` | challenge string |
//! | POST | `/submitstar` | sealed block |
//! | GET  | `/block/height/:height` | block |
//! | GET  | `/block/hash/:hash` | block |
//! | GET  | `/blocks/:address` | star records |
//! | GET  | `/validateChain` | `{"valid", "findings"}` |
//! | GET  | `/health` | `{"status": "ok"}` |
//!
//! Failures render as `{"error": "<message>"}`.
//!
//! # Usage
//!
//! ```ignore
//! use sr_03_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let mut gateway = ApiGatewayService::new(GatewayConfig::default(), registry)?;
//! let addr = gateway.start().await?;
//! // ...
//! gateway.shutdown().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;

// Re-exports
pub use domain::config::{ConfigError, GatewayConfig};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use router::build_router;
pub use service::ApiGatewayService;
