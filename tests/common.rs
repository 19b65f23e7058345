// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging, in-memory database, server resources, and sample measurement helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pulse_server`

use anyhow::Result;
use axum::Router;
use pulse_core::models::MeasurementInput;
use pulse_intelligence::{RecipeCatalog, WorkoutCatalog};
use pulse_server::{
    config::ServerConfig, database::Database, resources::ServerResources, server::build_router,
};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Server resources over an in-memory database and the embedded catalogs
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    let config = ServerConfig {
        database_url: "sqlite::memory:".to_owned(),
        ..ServerConfig::default()
    };
    Ok(Arc::new(ServerResources::new(
        database,
        Arc::new(config),
        RecipeCatalog::embedded()?,
        WorkoutCatalog::embedded()?,
    )))
}

/// Full application router over fresh test resources
pub async fn create_test_app() -> Result<Router> {
    Ok(build_router(create_test_resources().await?))
}

/// Random user id rendered for a URL path
pub fn new_user_path() -> (Uuid, String) {
    let user_id = Uuid::new_v4();
    (user_id, format!("/api/users/{user_id}"))
}

/// Male, 75 kg, 175 cm, 30 years, moderate activity, cutting, non-smoker
pub fn sample_measurements() -> MeasurementInput {
    MeasurementInput {
        weight_kg: Some(75.0),
        height_cm: Some(175.0),
        age_years: Some(30),
        sex: Some("male".to_owned()),
        activity_level: Some("moderate".to_owned()),
        goal: Some("cutting".to_owned()),
        is_smoker: Some(false),
    }
}

/// Input whose protein and fat targets exceed the calorie target
pub fn carb_clamp_measurements() -> MeasurementInput {
    MeasurementInput {
        weight_kg: Some(150.0),
        height_cm: Some(150.0),
        age_years: Some(80),
        sex: Some("female".to_owned()),
        activity_level: Some("sedentary".to_owned()),
        goal: Some("cutting".to_owned()),
        is_smoker: Some(false),
    }
}
