// ABOUTME: Request tracing span construction for the HTTP server
// ABOUTME: Tags every request span with a request id taken from x-request-id or generated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

use axum::body::Body;
use http::Request;
use tracing::{field, info_span, Span};
use uuid::Uuid;

/// Header carrying a caller-supplied request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id from the `x-request-id` header, or a fresh `req_<uuid>`
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(
            || format!("req_{}", Uuid::new_v4().simple()),
            ToOwned::to_owned,
        )
}

/// Span for one HTTP request, used as the `TraceLayer` span factory
pub fn request_span(request: &Request<Body>) -> Span {
    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
        status_code = field::Empty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_prefers_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(())
            .unwrap();
        assert_eq!(request_id(&request), "abc-123");
    }

    #[test]
    fn test_request_id_generated_when_missing() {
        let request = Request::builder().body(()).unwrap();
        let id = request_id(&request);
        assert!(id.starts_with("req_"));
        assert_eq!(id.len(), "req_".len() + 32);
    }
}
