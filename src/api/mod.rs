//! HTTP API: node catalog and health endpoints.

pub mod cors;
pub mod docs;
pub mod handlers;
pub mod routes;
pub mod server;

pub use cors::create_cors_layer;
pub use docs::ApiDoc;
pub use handlers::AppState;
pub use routes::{create_router, router_from_config};
pub use server::{run, serve};
