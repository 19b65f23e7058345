// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses HTTP, database, catalog, CORS, and log settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_vars, ports};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Optional replacements for the embedded catalogs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Recipe catalog JSON file
    pub recipes_path: Option<PathBuf>,
    /// Workout catalog JSON file
    pub workouts_path: Option<PathBuf>,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// `SQLite` database URL
    pub database_url: String,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Catalog overrides
    pub catalogs: CatalogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: defaults::HTTP_HOST.to_owned(),
            http_port: ports::DEFAULT_HTTP_PORT,
            database_url: defaults::DATABASE_URL.to_owned(),
            log_level: LogLevel::default(),
            environment: Environment::default(),
            cors: CorsConfig::default(),
            catalogs: CatalogConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` if `HTTP_PORT` is set but not a valid port number
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match non_empty_var(env_vars::HTTP_PORT) {
            Some(raw) => parse_port(&raw)?,
            None => ports::DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            http_host: env_var_or(env_vars::HTTP_HOST, defaults::HTTP_HOST),
            http_port,
            database_url: env_var_or(env_vars::DATABASE_URL, defaults::DATABASE_URL),
            log_level: LogLevel::from_str_or_default(&env_var_or(
                env_vars::LOG_LEVEL,
                defaults::LOG_LEVEL,
            )),
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or(env_vars::CORS_ALLOWED_ORIGINS, "*"),
            },
            catalogs: CatalogConfig {
                recipes_path: non_empty_var(env_vars::RECIPE_CATALOG_PATH).map(PathBuf::from),
                workouts_path: non_empty_var(env_vars::WORKOUT_CATALOG_PATH).map(PathBuf::from),
            },
        })
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        let catalog_source = |path: Option<&PathBuf>| {
            path.map_or_else(|| "embedded".to_owned(), |p| p.display().to_string())
        };
        format!(
            "Pulse Server Configuration:\n\
             - Environment: {}\n\
             - HTTP: {}:{}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Recipe Catalog: {}\n\
             - Workout Catalog: {}\n\
             - CORS Origins: {}",
            self.environment,
            self.http_host,
            self.http_port,
            self.log_level,
            self.database_url,
            catalog_source(self.catalogs.recipes_path.as_ref()),
            catalog_source(self.catalogs.workouts_path.as_ref()),
            self.cors.allowed_origins,
        )
    }
}

/// Parse an HTTP port value
///
/// # Errors
///
/// Returns `CONFIG_ERROR` if the value is not an integer in `1..=65535`
pub fn parse_port(raw: &str) -> AppResult<u16> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| AppError::config(format!("Invalid HTTP_PORT value '{raw}'")))
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    non_empty_var(key).unwrap_or_else(|| default.to_owned())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
