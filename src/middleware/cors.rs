// ABOUTME: CORS middleware configuration for the recipe API
// ABOUTME: Lets the browser client on another origin call the recipe endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::CorsConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Configure CORS for the recipe service
///
/// An empty origin list or `*` allows any origin. Otherwise only the listed
/// origins are accepted; entries that are not valid header values are skipped.
///
/// ```bash
/// # Allow all origins (development)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow the deployed web client only
/// export CORS_ALLOWED_ORIGINS="https://meal-planner-1-hk0m.onrender.com"
/// ```
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allows_any() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| warn!(origin = %origin, "Ignoring invalid CORS origin"))
                    .ok()
            })
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
