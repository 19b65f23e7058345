// ABOUTME: Calculator route handlers for body metrics and diet plans
// ABOUTME: Runs validation, metric computation, and meal allocation for posted measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator routes
//!
//! Stateless: nothing is persisted here. Saving a result goes through the
//! plan routes.

use crate::{errors::AppError, resources::ServerResources};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use pulse_core::models::{DietPlan, MeasurementInput, MetricResult};
use pulse_intelligence::{allocate_diet, calculate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Calculator output: metrics plus the matching diet plan
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Computed metrics
    pub metrics: MetricResult,
    /// Diet plan for `metrics.target_calories`
    pub diet_plan: DietPlan,
}

/// Calculator routes implementation
pub struct CalculatorRoutes;

impl CalculatorRoutes {
    /// Create all calculator routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/calculator", post(Self::calculate))
            .route("/api/calculator/diet-plan", post(Self::diet_plan))
            .with_state(resources)
    }

    /// Validate measurements, compute metrics, and allocate meals
    async fn calculate(
        State(resources): State<Arc<ServerResources>>,
        Json(input): Json<MeasurementInput>,
    ) -> Result<Response, AppError> {
        let metrics = calculate(&input)?;
        let diet_plan = allocate_diet(&metrics, &resources.recipes);

        info!(
            calculator.goal = %metrics.goal,
            calculator.smoker = metrics.is_smoker,
            calculator.target_calories = metrics.target_calories,
            calculator.warnings = metrics.warnings.len(),
            "Metrics calculated"
        );

        Ok((StatusCode::OK, Json(CalculationResponse { metrics, diet_plan })).into_response())
    }

    /// Allocate meals for an existing metric result
    async fn diet_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(metrics): Json<MetricResult>,
    ) -> Result<Response, AppError> {
        if !metrics.target_calories.is_finite() || metrics.target_calories <= 0.0 {
            return Err(AppError::invalid_input("target_calories must be positive")
                .with_details(serde_json::json!({ "field": "target_calories" })));
        }

        let diet_plan = allocate_diet(&metrics, &resources.recipes);
        Ok((StatusCode::OK, Json(diet_plan)).into_response())
    }
}
