//! HTTP server startup.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use super::routes::router_from_config;
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::utils::shutdown_signal;

/// Serve `router` on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM.
pub async fn run(config: &Config) -> Result<()> {
    let addr = config.socket_addr().map_err(ServiceError::InvalidConfig)?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    info!("Node catalog delay: {}ms", config.nodes_delay_ms);
    if config.allows_any_origin() {
        info!("CORS: any origin (credentials: {})", config.cors_allow_credentials);
    } else {
        info!("CORS: {}", config.cors_allowed_origins.join(", "));
    }

    serve(listener, router_from_config(config), shutdown_signal()).await?;
    info!("HTTP server stopped");
    Ok(())
}
