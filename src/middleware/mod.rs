// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Request spans with correlation ids and CORS layer construction from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{make_request_span, request_id_from_headers, REQUEST_ID_HEADER};
