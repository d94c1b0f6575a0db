//! HTTP routes over [`StarRegistryApi`].
//!
//! Handlers stay thin: extract, call the registry, map the error.
//! Signature recovery and full chain walks run on the blocking pool so
//! they never stall the async workers.

use crate::domain::config::GatewayConfig;
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::types::{ChainReport, HeightResponse, SubmitStarRequest, ValidationRequest};
use crate::middleware::create_cors_layer;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use hex::FromHex;
use sr_01_ledger::{Block, Hash, StarRecord};
use sr_02_ownership::StarRegistryApi;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn StarRegistryApi>,
}

/// Build the HTTP router with its middleware stack.
pub fn build_router(registry: Arc<dyn StarRegistryApi>, config: &GatewayConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(create_cors_layer(config))
        .map_response(|res: axum::http::Response<_>| res.map(axum::body::Body::new))
        .layer(TraceLayer::new_for_http());

    Router::new()
        .route("/height", get(get_height))
        .route("/requestValidation", post(request_validation))
        .route("/submitstar", post(submit_star))
        .route("/block/height/:height", get(block_by_height))
        .route("/block/hash/:hash", get(block_by_hash))
        .route("/blocks/:address", get(blocks_by_owner))
        .route("/validateChain", get(validate_chain))
        .route("/health", get(health_check))
        .layer(middleware)
        .with_state(AppState { registry })
}

async fn get_height(State(state): State<AppState>) -> Json<HeightResponse> {
    Json(HeightResponse {
        height: state.registry.chain_height(),
    })
}

async fn request_validation(
    State(state): State<AppState>,
    payload: Result<Json<ValidationRequest>, JsonRejection>,
) -> ApiResult<Json<String>> {
    let Json(request) = payload?;
    if request.address.is_empty() {
        return Err(ApiError::bad_request("address is required"));
    }
    Ok(Json(state.registry.request_challenge(&request.address)))
}

async fn submit_star(
    State(state): State<AppState>,
    payload: Result<Json<SubmitStarRequest>, JsonRejection>,
) -> ApiResult<Json<Block>> {
    let Json(request) = payload?;
    let registry = Arc::clone(&state.registry);
    let block = run_blocking(move || registry.submit_record(request.into())).await??;
    Ok(Json(block))
}

async fn block_by_height(
    State(state): State<AppState>,
    height: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Block>> {
    let Path(height) = height?;
    Ok(Json(state.registry.block_by_height(height)?))
}

async fn block_by_hash(
    State(state): State<AppState>,
    hash: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Block>> {
    let Path(raw) = hash?;
    let hash = parse_hash(&raw)?;
    Ok(Json(state.registry.block_by_hash(&hash)?))
}

async fn blocks_by_owner(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Json<Vec<StarRecord>> {
    Json(state.registry.records_by_owner(&address))
}

async fn validate_chain(State(state): State<AppState>) -> ApiResult<Json<ChainReport>> {
    let registry = Arc::clone(&state.registry);
    let findings = run_blocking(move || registry.validate_chain()).await?;
    Ok(Json(findings.into()))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn run_blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::internal(format!("worker task failed: {e}")))
}

/// 64 hex digits, optional `0x`.
fn parse_hash(raw: &str) -> ApiResult<Hash> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    Ok(Hash::from_hex(digits)?)
}
