//! CORS (Cross-Origin Resource Sharing) layer configuration.
//!
//! The default policy is wide open for local development of the editor
//! frontend. Origins can be narrowed with `CORS_ALLOWED_ORIGINS`.

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::Config;

/// Creates a CORS layer based on the provided configuration.
///
/// Browsers reject a literal `*` alongside credentials, so "any origin"
/// is expressed by mirroring the request's origin, method and headers.
pub fn create_cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(to_header_values(&config.cors_allowed_origins))
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.cors_allow_credentials)
        .max_age(Duration::from_secs(config.cors_max_age_seconds))
}

/// Converts configured origins to header values, skipping unparsable ones.
fn to_header_values(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect()
}
