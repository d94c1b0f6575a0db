//! # HTTP Flows
//!
//! The registration flow through the axum router, with the registry behind
//! `Arc<dyn StarRegistryApi>` exactly as the node wires it.

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use sr_02_ownership::test_utils::{address_of, generate_signing_key, sign_personal_message};
    use sr_02_ownership::{OwnershipConfig, StarRegistryApi, StarRegistryService};
    use sr_03_api_gateway::{build_router, GatewayConfig};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> (Router, Arc<dyn StarRegistryApi>) {
        let registry: Arc<dyn StarRegistryApi> =
            Arc::new(StarRegistryService::with_config(OwnershipConfig::default()));
        (
            build_router(Arc::clone(&registry), &GatewayConfig::default()),
            registry,
        )
    }

    async fn call(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn register(router: &Router, key: &k256::ecdsa::SigningKey, star: Value) -> (StatusCode, Value) {
        let address = address_of(key);
        let (_, challenge) = call(
            router,
            "POST",
            "/requestValidation",
            Some(json!({ "address": address })),
        )
        .await;
        let challenge = challenge.as_str().unwrap().to_string();

        call(
            router,
            "POST",
            "/submitstar",
            Some(json!({
                "address": address,
                "signature": sign_personal_message(key, &challenge),
                "message": challenge,
                "star": star,
            })),
        )
        .await
    }

    #[tokio::test]
    async fn test_http_and_library_views_agree() {
        let (router, registry) = router();
        let alice = generate_signing_key();
        let bob = generate_signing_key();

        for (key, star) in [(&alice, "a1"), (&bob, "b1"), (&alice, "a2")] {
            let (status, _) = register(&router, key, json!(star)).await;
            assert_eq!(status, StatusCode::OK);
        }

        assert_eq!(registry.chain_height(), 3);
        let (_, height) = call(&router, "GET", "/height", None).await;
        assert_eq!(height["height"], 3);

        let (_, records) = call(&router, "GET", &format!("/blocks/{}", address_of(&alice)), None).await;
        let stars: Vec<_> = records
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["star"].clone())
            .collect();
        assert_eq!(stars, vec![json!("a1"), json!("a2")]);

        for height in 0..=3u64 {
            let block = registry.block_by_height(height).unwrap();
            let (_, by_hash) = call(&router, "GET", &format!("/block/hash/{}", block.hash_hex()), None).await;
            assert_eq!(by_hash["height"], height);
        }
    }

    #[tokio::test]
    async fn test_status_codes() {
        let (router, _) = router();
        let key = generate_signing_key();
        let address = address_of(&key);

        let expired = format!("{address}:1:starRegistry");
        let cases = [
            (
                json!({ "address": address, "message": expired, "signature": sign_personal_message(&key, &expired), "star": 1 }),
                StatusCode::BAD_REQUEST,
            ),
            (
                json!({ "address": address, "message": "nope", "signature": "0x", "star": 1 }),
                StatusCode::BAD_REQUEST,
            ),
            (
                json!({ "address": address, "message": "x" }),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (body, status) in cases {
            let (actual, error) = call(&router, "POST", "/submitstar", Some(body)).await;
            assert_eq!(actual, status);
            assert!(error["error"].is_string());
        }

        let (status, _) = call(&router, "GET", "/block/height/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validate_chain_reports_valid() {
        let (router, _) = router();
        register(&router, &generate_signing_key(), json!({ "ra": "1h" })).await;

        let (status, report) = call(&router, "GET", "/validateChain", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report, json!({ "valid": true, "findings": [] }));
    }
}
