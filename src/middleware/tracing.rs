// ABOUTME: Request tracing helpers for correlation ids and per-request spans
// ABOUTME: Used by the tower-http trace layer to tag every request with method, path, and id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::body::Body;
use http::{HeaderMap, Request};
use tracing::Span;
use uuid::Uuid;

/// Header carrying a caller-supplied correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Caller-supplied request id, or a fresh `req_<uuid>` one
#[must_use]
pub fn request_id_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), str::to_owned)
}

/// Span for one HTTP request
pub fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id_from_headers(request.headers()),
        status_code = tracing::field::Empty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_request_id_is_propagated() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(request_id_from_headers(&headers), "abc-123");
    }

    #[test]
    fn test_request_id_is_generated_when_absent() {
        let id = request_id_from_headers(&HeaderMap::new());
        assert!(id.starts_with("req_"));
        assert_eq!(id.len(), "req_".len() + 32);
    }
}
