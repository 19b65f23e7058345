// ABOUTME: Unified error handling re-exported from pulse-core for server modules
// ABOUTME: AppError, ErrorCode, ErrorResponse, and the calculator's ValidationError taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `pulse-core` so the engine crate and the server
//! share one taxonomy. With the `http-response` feature `AppError` renders as
//! an `ErrorResponse` JSON body with the status of its `ErrorCode`.

pub use pulse_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, InputField,
    ValidationError,
};
