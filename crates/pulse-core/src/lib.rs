// ABOUTME: Core types and constants for the Pulse fitness and nutrition platform
// ABOUTME: Foundation crate with error handling, domain models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulse Core
//!
//! Foundation crate providing shared types and constants for the Pulse fitness
//! server. This crate changes infrequently, so the workspace gets incremental
//! compilation benefits when only the intelligence or server layers move.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Formula coefficients and fixed product constants
//! - **models**: Measurement input, metric results, diet plans, catalogs, progress, chat

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Formula coefficients and fixed product constants organized by domain
pub mod constants;

/// Core data models (measurements, metrics, diet plans, recipes, workouts, progress)
pub mod models;
