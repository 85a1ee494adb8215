//! Node type catalog service for the AI pipeline editor.
//!
//! Serves a fixed, ordered list of pipeline node types after a simulated
//! network delay, plus a liveness probe:
//!
//! ```text
//! GET /api/nodes  -> [{"id":"1","name":"Data Source"}, ...]   (after ~1s)
//! GET /health     -> {"status":"healthy","service":"ai-pipeline-node-service"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`catalog`]: The constant node type table
//! - [`api`]: HTTP routes, CORS, OpenAPI document and server startup
//! - [`metrics`]: Prometheus request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
