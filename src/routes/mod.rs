// ABOUTME: Route module organization for Pulse HTTP endpoints
// ABOUTME: Calculator, catalog, profile, plan, progress, and assistant routes plus health checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Pulse server
//!
//! Each domain module exposes a `XRoutes::routes(resources)` constructor
//! with thin handlers delegating to the intelligence crate and the database
//! managers. User-scoped routes take the user id from the path; identity is
//! established upstream.

/// Assistant chat routes
pub mod chat;
/// Calculator and diet plan routes
pub mod calculator;
/// Recipe and workout catalog routes
pub mod catalog;
/// Health check and system status routes
pub mod health;
/// Saved plan routes
pub mod plans;
/// User profile routes
pub mod profile;
/// Progress and workout log routes
pub mod progress;

pub use calculator::CalculatorRoutes;
pub use catalog::CatalogRoutes;
pub use chat::ChatRoutes;
pub use health::HealthRoutes;
pub use plans::PlanRoutes;
pub use profile::ProfileRoutes;
pub use progress::ProgressRoutes;

use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use uuid::Uuid;

/// Pagination query shared by list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    /// Maximum number of records
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Parse a path user id
///
/// # Errors
///
/// Returns `INVALID_INPUT` if the value is not a UUID
pub fn parse_user_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        AppError::invalid_input(format!("Invalid user id '{raw}'"))
            .with_details(serde_json::json!({ "field": "user_id" }))
    })
}
