// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration for ports, database, catalogs, CORS, and logging level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Pulse server
//!
//! Configuration is read from environment variables only; there is no
//! configuration file.

/// Environment and server configuration
pub mod environment;

pub use environment::{CatalogConfig, CorsConfig, Environment, LogLevel, ServerConfig};
