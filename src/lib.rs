// ABOUTME: Main library entry point for the Pulse fitness and nutrition server
// ABOUTME: HTTP API, SQLite persistence, configuration, and logging around the metrics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulse Server
//!
//! A REST service that turns body measurements into BMI, BMR, TDEE, a
//! goal-adjusted calorie target, a macro split, and a five-slot diet plan.
//! Around that core it stores user profiles, saved plans, progress entries,
//! workout logs, and assistant chat history.
//!
//! ## Architecture
//!
//! - **`pulse-core`**: error types, domain models, and formula constants
//! - **`pulse-intelligence`**: validator, calculator, diet allocator, catalogs, assistant
//! - **this crate**: configuration, logging, database managers, and HTTP routes
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pulse_server::config::environment::ServerConfig;
//! use pulse_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Pulse server configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// Constants re-exported from `pulse-core` plus server-side defaults
pub mod constants;

/// Unified error handling re-exported from `pulse-core`
pub mod errors;

/// Logging configuration and tracing subscriber setup
pub mod logging;

/// `SQLite` persistence for profiles, plans, progress, and chat
pub mod database;

/// HTTP middleware (CORS, request spans)
pub mod middleware;

/// Shared server resources handed to every route group
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Router assembly and the HTTP listener
pub mod server;

/// Local state file used by the CLI
pub mod local_state;
