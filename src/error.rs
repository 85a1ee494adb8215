//! Unified error types for the node service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error type for service startup and operation.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced to HTTP clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Any fault inside the service. Details stay in the logs.
    #[error("internal server error")]
    Internal,
}

/// Error body: `{"detail": "<reason phrase>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable reason phrase.
    pub detail: &'static str,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self
            .status()
            .canonical_reason()
            .unwrap_or("Internal Server Error");
        (self.status(), Json(ErrorBody { detail })).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn internal_error_renders_generic_500() {
        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"detail":"Internal Server Error"}"#);
    }

    #[test]
    fn json_failures_convert_into_service_error() {
        let err: ServiceError = serde_json::from_str::<u8>("not json").unwrap_err().into();
        assert!(matches!(err, ServiceError::Json(_)));
        assert!(err.to_string().starts_with("json error:"));
    }

    #[test]
    fn invalid_config_message() {
        let err = ServiceError::InvalidConfig("PORT out of range".to_string());
        assert_eq!(err.to_string(), "invalid configuration: PORT out of range");
    }
}
