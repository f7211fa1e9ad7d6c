//! Gateway error types.
//!
//! Every failure carries a JSON-RPC style code for logs and an HTTP status
//! for the response. Only the message reaches the client.

use axum::http::StatusCode;
use std::fmt;
use wl_03_job_pipeline::{ErrorKind, PipelineError};

/// Error codes
pub mod codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    pub const RESOURCE_NOT_FOUND: i32 = -32001;
}

/// A failed RPC call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
}

impl ApiError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Body was not a JSON request envelope.
    pub fn parse_error(details: impl fmt::Display) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Invalid request: {details}"))
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            codes::METHOD_NOT_FOUND,
            format!("Method not found: {method}"),
        )
    }

    /// Params did not decode into the method's shape.
    pub fn invalid_params(details: impl fmt::Display) -> Self {
        Self::new(codes::INVALID_PARAMS, details.to_string())
    }

    /// HTTP status for this error.
    ///
    /// Clients only distinguish a broken envelope (400) and an unknown method
    /// (404); every other failure is reported as 500.
    pub fn status_code(&self) -> StatusCode {
        match self.code {
            codes::PARSE_ERROR => StatusCode::BAD_REQUEST,
            codes::METHOD_NOT_FOUND => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        let code = match e.kind() {
            ErrorKind::Validation => codes::INVALID_PARAMS,
            ErrorKind::NotFound => codes::RESOURCE_NOT_FOUND,
            ErrorKind::Persistence => codes::INTERNAL_ERROR,
        };
        Self::new(code, e.to_string())
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Server-level errors (startup and shutdown, never sent to clients)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("server bind error: {0}")]
    Bind(String),

    #[error("server error: {0}")]
    Serve(String),
}
