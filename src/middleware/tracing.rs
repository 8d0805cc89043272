// ABOUTME: Request tracing for the recipe service
// ABOUTME: Creates one span per HTTP request carrying a request ID for log correlation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use axum::http::Request;
use tracing::Span;
use uuid::Uuid;

/// Header clients may set to correlate their logs with ours
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID from the incoming header, or a fresh one
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), ToOwned::to_owned)
}

/// Span for one HTTP request, used as the `TraceLayer` span factory
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "http_request",
        request_id = %request_id(request),
        method = %request.method(),
        uri = %request.uri(),
    )
}
