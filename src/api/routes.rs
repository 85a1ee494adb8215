//! HTTP API route definitions.

use std::any::Any;

use axum::{middleware, response::IntoResponse, response::Response, routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use super::cors::create_cors_layer;
use super::handlers::{health, list_nodes, AppState};
use crate::config::Config;
use crate::error::ApiError;
use crate::metrics::track_requests;

/// Create the API router.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let routes = Router::new()
        // Node catalog
        .route("/api/nodes", get(list_nodes))
        // Health endpoint
        .route("/health", get(health))
        .route_layer(middleware::from_fn(track_requests))
        .with_state(state);

    with_middleware(routes, cors)
}

/// Create the API router from loaded configuration.
pub fn router_from_config(config: &Config) -> Router {
    create_router(AppState::from_config(config), create_cors_layer(config))
}

/// Outer layers shared by every route. CORS sits outermost so that error
/// and not-found responses carry the headers too.
fn with_middleware(router: Router, cors: CorsLayer) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(%reason, "Request handler panicked");
    ApiError::Internal.into_response()
}
