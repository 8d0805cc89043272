// ABOUTME: HTTP middleware for the recipe service
// ABOUTME: CORS configuration and per-request tracing spans
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Cross-origin configuration
pub mod cors;
/// Request spans and request IDs
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{create_request_span, request_id, REQUEST_ID_HEADER};
