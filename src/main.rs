//! AI pipeline node service entry point.

use std::net::IpAddr;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pipeline_node_service::api::{self, docs};
use pipeline_node_service::catalog::NODE_TYPES;
use pipeline_node_service::config::Config;
use pipeline_node_service::metrics;

/// Mock backend providing node types for the pipeline editor.
#[derive(Parser, Debug)]
#[command(name = "pipeline-node-service")]
#[command(about = "Serves the node type catalog for the AI pipeline editor")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true, env = "VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Interface to bind (overrides HOST).
    #[arg(long)]
    host: Option<IpAddr>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Interface to bind (overrides HOST).
        #[arg(long)]
        host: Option<IpAddr>,

        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration before logging so RUST_LOG/LOG_JSON from .env apply
    let config = Config::load();
    let (rust_log, log_json) = match &config {
        Ok(c) => (c.rust_log.clone(), c.log_json),
        Err(_) => ("info".to_string(), false),
    };

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("pipeline_node_service=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(&rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = if log_json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(config),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port).await,
        None => cmd_serve(config, args.host, args.port).await,
    }
}

/// Run the HTTP server.
async fn cmd_serve(
    config: pipeline_node_service::Result<Config>,
    host: Option<IpAddr>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(host) = host {
        config.host = host.to_string();
    }
    if let Some(port) = port {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    // Initialize metrics
    metrics::init_metrics();
    if let Some(addr) = config.metrics_addr().map_err(|e| anyhow::anyhow!(e))? {
        metrics::install_exporter(addr)?;
    }

    info!("Serving {} node types", NODE_TYPES.len());
    api::run(&config).await?;
    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(config: pipeline_node_service::Result<Config>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PIPELINE NODE SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match config {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}:{}", config.host, config.port);
    println!("  Node Catalog Delay: {}ms", config.nodes_delay_ms);
    if config.allows_any_origin() {
        println!("  CORS Origins: any");
    } else {
        println!("  CORS Origins: {}", config.cors_allowed_origins.join(", "));
    }
    println!("  CORS Credentials: {}", config.cors_allow_credentials);
    match config.metrics_port {
        Some(port) => println!("  Metrics Port: {}", port),
        None => println!("  Metrics: Disabled"),
    }
    println!("  Log Level: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    println!("{}", docs::openapi_json()?);
    Ok(())
}
