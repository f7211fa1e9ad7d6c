//! # JSON-RPC Flows
//!
//! Drives the axum router backed by the real pipeline and in-memory store,
//! exactly as a client of the deployed server would.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use node_runtime::{NodeConfig, WhitelistNode};
    use wl_04_rpc_gateway::build_router;

    use crate::integration::numbered_entries;

    fn router() -> Router {
        let config = NodeConfig::default();
        let node = WhitelistNode::build(config.clone()).unwrap();
        build_router(&config.gateway, node.api())
    }

    async fn rpc(router: &Router, body: Value) -> (StatusCode, Value) {
        let response = router
            .clone()
            .oneshot(
                Request::post("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn generate(router: &Router, network: &str, entries: Vec<String>) -> String {
        let (status, body) = rpc(
            router,
            json!({"method": "generateMerkleTree", "params": {"network": network, "entries": entries}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["result"].as_str().unwrap().to_string()
    }

    async fn wait_root(router: &Router, request_id: &str) -> String {
        for _ in 0..200 {
            let (status, body) = rpc(
                router,
                json!({"method": "getMerkleRoot", "params": {"requestId": request_id}}),
            )
            .await;
            assert_eq!(status, StatusCode::OK, "{body}");
            if let Some(root) = body["result"].as_str() {
                return root.to_string();
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("job {request_id} never produced a root");
    }

    #[tokio::test]
    async fn test_generate_root_proof_round_trip() {
        let router = router();
        let id = generate(&router, "starknet", numbered_entries(20)).await;
        let root = wait_root(&router, &id).await;
        assert_eq!(
            root,
            "0xbfddde52fc7d24a63693fb4dfa257571238e2d654aecbe6bc26f067e770bc5"
        );

        let (status, body) = rpc(
            &router,
            json!({"method": "getMerkleProof", "params": {"root": root, "index": 2}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let proof = body["result"].as_array().unwrap();
        assert_eq!(proof.len(), 5);
        assert!(proof.iter().all(|node| node.as_str().unwrap().starts_with("0x")));
    }

    #[tokio::test]
    async fn test_root_lookup_accepts_uppercase_hex() {
        let router = router();
        let id = generate(&router, "evm", vec!["0x00000000000000000000000000000000000000aa:5".into()]).await;
        let root = wait_root(&router, &id).await;

        let upper = format!("0x{}", root.trim_start_matches("0x").to_uppercase());
        let (status, body) = rpc(
            &router,
            json!({"method": "getMerkleProof", "params": {"root": upper, "index": 0}}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": []}));
    }

    #[tokio::test]
    async fn test_pipeline_errors_surface_in_envelope() {
        let router = router();

        let (status, body) = rpc(
            &router,
            json!({"method": "generateMerkleTree", "params": {"network": "evm", "entries": []}}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "entries cannot be empty"}));

        let (_, body) = rpc(&router, json!({"method": "getMerkleRoot", "params": {}})).await;
        assert_eq!(body, json!({"error": "requestId cannot be empty"}));

        let (_, body) = rpc(
            &router,
            json!({"method": "getMerkleRoot", "params": {"requestId": "nope"}}),
        )
        .await;
        assert_eq!(body, json!({"error": "request not found"}));

        let (_, body) = rpc(
            &router,
            json!({"method": "getMerkleProof", "params": {"root": "0x99", "index": 0}}),
        )
        .await;
        assert_eq!(body, json!({"error": "request not found"}));

        let (status, body) = rpc(
            &router,
            json!({"method": "generateMerkleTree", "params": {"network": "evm", "entries": ["bad"]}}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("invalid payload format"));
    }

    #[tokio::test]
    async fn test_unknown_method_and_bad_json() {
        let router = router();

        let (status, body) = rpc(&router, json!({"method": "deleteEverything"})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Method not found: deleteEverything"}));

        let response = router
            .clone()
            .oneshot(Request::post("/").body(Body::from("{not json")).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
