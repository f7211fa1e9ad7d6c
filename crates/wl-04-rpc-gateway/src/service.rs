//! HTTP server: router, handlers, lifecycle.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use wl_03_job_pipeline::WhitelistApi;

use crate::domain::config::GatewayConfig;
use crate::domain::error::{ApiError, GatewayError};
use crate::domain::methods::RpcRequest;
use crate::middleware::create_cors_layer;
use crate::rpc::WhitelistRpc;

#[derive(Clone)]
struct AppState {
    rpc: WhitelistRpc,
}

/// Build the gateway router around `api`.
pub fn build_router(config: &GatewayConfig, api: Arc<dyn WhitelistApi>) -> Router {
    let state = AppState {
        rpc: WhitelistRpc::new(api),
    };

    Router::new()
        .route("/", post(handle_rpc))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(create_cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// RPC server bound to the configured address.
pub struct RpcServer {
    config: GatewayConfig,
    api: Arc<dyn WhitelistApi>,
}

impl RpcServer {
    pub fn new(config: GatewayConfig, api: Arc<dyn WhitelistApi>) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;
        Ok(Self { config, api })
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{addr}: {e}")))?;

        info!(addr = %addr, "RPC server listening");

        let router = build_router(&self.config, self.api);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| GatewayError::Serve(e.to_string()))?;

        info!("RPC server stopped");
        Ok(())
    }
}

async fn handle_rpc(State(state): State<AppState>, body: String) -> Response {
    let request: RpcRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => return error_response(ApiError::parse_error(e)),
    };

    match state.rpc.route_method(&request.method, request.params).await {
        Ok(result) => (StatusCode::OK, Json(json!({ "result": result }))).into_response(),
        Err(e) => {
            warn!(method = %request.method, code = e.code, error = %e.message, "RPC call failed");
            error_response(e)
        }
    }
}

fn error_response(error: ApiError) -> Response {
    (error.status_code(), Json(json!({ "error": error.message }))).into_response()
}

async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn metrics() -> Response {
    match wl_telemetry::encode_metrics() {
        Ok(text) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
