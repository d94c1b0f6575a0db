//! CORS middleware.
//!
//! Wrapper around tower-http CORS with gateway configuration.

use crate::domain::config::GatewayConfig;
use axum::http::{header, Method};
use tower_http::cors::CorsLayer;

/// Create CORS layer from gateway config
pub fn create_cors_layer(config: &GatewayConfig) -> CorsLayer {
    if config.cors_permissive {
        return CorsLayer::permissive();
    }

    // Same-origin browsers only; still answer preflight for JSON posts
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
