//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;
use serde::Deserialize;

use crate::error::ServiceError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface to bind the HTTP server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Artificial latency applied to the node listing, in milliseconds.
    #[serde(default = "default_nodes_delay_ms")]
    pub nodes_delay_ms: u64,

    // === CORS ===
    /// Allowed origins. Empty or `*` allows any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,

    /// Whether browsers may send credentials cross-origin.
    #[serde(default = "default_true")]
    pub cors_allow_credentials: bool,

    /// Preflight cache lifetime in seconds.
    #[serde(default = "default_cors_max_age")]
    pub cors_max_age_seconds: u64,

    // === Observability ===
    /// Port for the Prometheus exporter. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Emit log lines as JSON.
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_nodes_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

fn default_cors_max_age() -> u64 {
    600
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            nodes_delay_ms: default_nodes_delay_ms(),
            cors_allowed_origins: Vec::new(),
            cors_allow_credentials: default_true(),
            cors_max_age_seconds: default_cors_max_age(),
            metrics_port: None,
            rust_log: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, ServiceError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Build configuration from explicit key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ServiceError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("HOST is not a valid IP address: {}", self.host));
        }

        if self.metrics_port == Some(self.port) {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        if let Some(bad) = self
            .cors_allowed_origins
            .iter()
            .find(|origin| origin.as_str() != "*" && origin.parse::<HeaderValue>().is_err())
        {
            return Err(format!("CORS_ALLOWED_ORIGINS contains an invalid origin: {bad}"));
        }

        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| format!("HOST is not a valid IP address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Address of the Prometheus exporter, if enabled.
    pub fn metrics_addr(&self) -> Result<Option<SocketAddr>, String> {
        match self.metrics_port {
            Some(port) => Ok(Some(SocketAddr::new(self.socket_addr()?.ip(), port))),
            None => Ok(None),
        }
    }

    /// Artificial latency for the node listing.
    pub fn nodes_delay(&self) -> Duration {
        Duration::from_millis(self.nodes_delay_ms)
    }

    /// Whether any origin is accepted.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.is_empty()
            || self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }
}
