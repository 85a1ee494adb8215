//! OpenAPI description of the HTTP API.

use utoipa::OpenApi;

use super::handlers::{self, HealthResponse};
use crate::catalog::NodeType;
use crate::error::Result;

/// OpenAPI document for the node service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Pipeline Node Service",
        description = "Provides node types with simulated network latency",
        version = "1.0.0"
    ),
    paths(handlers::list_nodes, handlers::health),
    components(schemas(NodeType, HealthResponse)),
    tags(
        (name = "nodes", description = "Node type catalog"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Render the OpenAPI document as pretty-printed JSON.
pub fn openapi_json() -> Result<String> {
    Ok(ApiDoc::openapi().to_pretty_json()?)
}
