// ABOUTME: Saved plan route handlers
// ABOUTME: Stores calculator results with their diet plans and lists them per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_user_id, LimitQuery};
use crate::{
    constants::limits, database::clamp_limit, database::SavedPlan, errors::AppError,
    resources::ServerResources,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pulse_core::models::{DietPlan, MetricResult};
use pulse_intelligence::allocate_diet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Request to save a calculator result
#[derive(Debug, Deserialize)]
pub struct SavePlanRequest {
    /// Metrics to save
    pub metrics: MetricResult,
    /// Diet plan to save, allocated from `metrics` when omitted
    #[serde(default)]
    pub diet_plan: Option<DietPlan>,
}

/// Saved plan list response
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanListResponse {
    /// Plans, newest first
    pub plans: Vec<SavedPlan>,
    /// Number of plans returned
    pub total: usize,
}

/// Saved plan routes implementation
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all saved plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/plans",
                get(Self::list_plans).post(Self::save_plan),
            )
            .route("/api/users/:user_id/plans/latest", get(Self::latest_plan))
            .with_state(resources)
    }

    async fn save_plan(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(request): Json<SavePlanRequest>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        if !request.metrics.target_calories.is_finite() || request.metrics.target_calories <= 0.0 {
            return Err(AppError::invalid_input("target_calories must be positive")
                .with_details(serde_json::json!({ "field": "metrics.target_calories" })));
        }

        let diet_plan = request
            .diet_plan
            .unwrap_or_else(|| allocate_diet(&request.metrics, &resources.recipes));

        let saved = resources
            .database
            .plans()
            .save_plan(user_id, &request.metrics, &diet_plan)
            .await?;

        info!(user.id = %user_id, plan.id = %saved.id, "Plan saved");
        Ok((StatusCode::CREATED, Json(saved)).into_response())
    }

    async fn list_plans(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<LimitQuery>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let limit = clamp_limit(query.limit, limits::DEFAULT_PLAN_LIMIT, limits::MAX_PLAN_LIMIT);
        let plans = resources.database.plans().list_plans(user_id, limit).await?;

        let total = plans.len();
        Ok((StatusCode::OK, Json(PlanListResponse { plans, total })).into_response())
    }

    async fn latest_plan(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let plan = resources
            .database
            .plans()
            .latest_plan(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Saved plan for user {user_id}")))?;

        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
