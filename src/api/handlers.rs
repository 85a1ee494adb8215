//! HTTP API handlers.

use std::time::Duration;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::catalog::{NodeType, NODE_TYPES};
use crate::config::Config;
use crate::metrics;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "ai-pipeline-node-service";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Artificial latency before the node catalog is returned.
    pub nodes_delay: Duration,
}

impl AppState {
    /// Create new app state with the given catalog latency.
    pub fn new(nodes_delay: Duration) -> Self {
        Self { nodes_delay }
    }

    /// Create app state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.nodes_delay())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests.
    #[schema(example = "healthy")]
    pub status: &'static str,
    /// Service identifier.
    #[schema(example = "ai-pipeline-node-service")]
    pub service: &'static str,
}

/// List node types available for pipeline construction.
///
/// Waits out the configured latency without holding a worker thread, so
/// other requests keep flowing while this one is pending.
#[utoipa::path(
    get,
    path = "/api/nodes",
    tag = "nodes",
    responses(
        (status = 200, description = "Node types in display order", body = [NodeType])
    )
)]
pub async fn list_nodes(State(state): State<AppState>) -> Json<[NodeType; 4]> {
    tokio::time::sleep(state.nodes_delay).await;
    debug!(count = NODE_TYPES.len(), "Serving node catalog");
    metrics::inc_node_catalog_served();
    Json(NODE_TYPES)
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn list_nodes_waits_for_configured_delay() {
        let state = AppState::new(Duration::from_millis(50));
        let start = Instant::now();

        let Json(nodes) = list_nodes(State(state)).await;

        assert!(start.elapsed() >= Duration::from_millis(50));
        assert_eq!(nodes, NODE_TYPES);
    }

    #[test]
    fn health_reports_service_name() {
        let Json(body) = tokio_test::block_on(health());
        assert_eq!(body.status, "healthy");
        assert_eq!(body.service, "ai-pipeline-node-service");
    }

    #[test]
    fn default_state_uses_one_second_delay() {
        assert_eq!(AppState::default().nodes_delay, Duration::from_secs(1));
    }
}
