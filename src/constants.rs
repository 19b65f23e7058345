// ABOUTME: Server constants and environment-variable names for the Pulse API
// ABOUTME: Re-exports domain constants from pulse-core and adds server defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Domain constants (formula coefficients, limits, ports) come from
//! `pulse-core`. This module adds defaults that only the server needs.

pub use pulse_core::constants::{limits, nutrition, ports, progress, service_names};

/// Server defaults
pub mod defaults {
    /// Default `SQLite` database URL
    pub const DATABASE_URL: &str = "sqlite:./data/pulse.db";
    /// Default bind host
    pub const HTTP_HOST: &str = "0.0.0.0";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
    /// Local CLI state file name under the user data directory
    pub const LOCAL_STATE_FILE: &str = "state.json";
    /// Directory name under the platform data directory
    pub const APP_DIR_NAME: &str = "pulse";
}

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// HTTP listener port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind host
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Override path for the recipe catalog JSON
    pub const RECIPE_CATALOG_PATH: &str = "RECIPE_CATALOG_PATH";
    /// Override path for the workout catalog JSON
    pub const WORKOUT_CATALOG_PATH: &str = "WORKOUT_CATALOG_PATH";
    /// Comma-separated CORS origins or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}
