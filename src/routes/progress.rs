// ABOUTME: Progress tracking route handlers
// ABOUTME: Weight and measurement entries, trend summaries, and completed workout logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_user_id, LimitQuery};
use crate::{
    constants::limits, database::clamp_limit, errors::AppError, resources::ServerResources,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use chrono::Utc;
use pulse_core::models::{NewProgressEntry, NewWorkoutLog, ProgressEntry, WorkoutLog};
use pulse_intelligence::summarize_progress;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Progress entry list response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressListResponse {
    /// Entries, oldest first
    pub entries: Vec<ProgressEntry>,
    /// Number of entries returned
    pub total: usize,
}

/// Workout log list response
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutLogListResponse {
    /// Logs, newest first
    pub logs: Vec<WorkoutLog>,
    /// Number of logs returned
    pub total: usize,
}

/// Progress routes implementation
pub struct ProgressRoutes;

impl ProgressRoutes {
    /// Create all progress routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/progress",
                get(Self::list_entries).post(Self::add_entry),
            )
            .route("/api/users/:user_id/progress/summary", get(Self::summary))
            .route(
                "/api/users/:user_id/progress/:entry_id",
                delete(Self::delete_entry),
            )
            .route(
                "/api/users/:user_id/workout-logs",
                get(Self::list_workout_logs).post(Self::add_workout_log),
            )
            .with_state(resources)
    }

    async fn add_entry(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(request): Json<NewProgressEntry>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        request.validate()?;

        let entry = request.into_entry(user_id);
        resources.database.progress().add_entry(&entry).await?;

        info!(user.id = %user_id, entry.id = %entry.id, progress.weight_kg = entry.weight_kg, "Progress logged");
        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    async fn list_entries(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<LimitQuery>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let limit = clamp_limit(
            query.limit,
            limits::DEFAULT_PROGRESS_LIMIT,
            limits::MAX_PROGRESS_LIMIT,
        );
        let entries = resources
            .database
            .progress()
            .list_entries(user_id, limit)
            .await?;

        let total = entries.len();
        Ok((StatusCode::OK, Json(ProgressListResponse { entries, total })).into_response())
    }

    async fn summary(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let entries = resources.database.progress().all_entries(user_id).await?;
        let height_cm = resources
            .database
            .profiles()
            .get_profile(user_id)
            .await?
            .and_then(|profile| profile.height_cm);

        let summary = summarize_progress(&entries, height_cm);
        Ok((StatusCode::OK, Json(summary)).into_response())
    }

    async fn delete_entry(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, entry_id)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let entry_id = Uuid::parse_str(&entry_id)
            .map_err(|_| AppError::not_found(format!("Progress entry {entry_id}")))?;

        let deleted = resources
            .database
            .progress()
            .delete_entry(user_id, entry_id)
            .await?;
        if !deleted {
            return Err(AppError::not_found(format!("Progress entry {entry_id}")));
        }

        info!(user.id = %user_id, entry.id = %entry_id, "Progress entry deleted");
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    async fn add_workout_log(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(request): Json<NewWorkoutLog>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let workout = resources.workouts.get(&request.workout_id).ok_or_else(|| {
            AppError::invalid_input(format!("Unknown workout id '{}'", request.workout_id))
                .with_details(serde_json::json!({ "field": "workout_id" }))
        })?;

        let duration_minutes = request.duration_minutes.unwrap_or(workout.duration_minutes);
        if duration_minutes == 0 {
            return Err(AppError::invalid_input("Duration must be at least one minute")
                .with_details(serde_json::json!({ "field": "duration_minutes" })));
        }

        let log = WorkoutLog {
            id: Uuid::new_v4(),
            user_id,
            workout_id: workout.id.clone(),
            completed_at: request.completed_at.unwrap_or_else(Utc::now),
            duration_minutes,
            notes: request.notes,
        };
        resources.database.progress().add_workout_log(&log).await?;

        info!(user.id = %user_id, workout.id = %log.workout_id, "Workout logged");
        Ok((StatusCode::CREATED, Json(log)).into_response())
    }

    async fn list_workout_logs(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<LimitQuery>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let limit = clamp_limit(
            query.limit,
            limits::DEFAULT_PROGRESS_LIMIT,
            limits::MAX_PROGRESS_LIMIT,
        );
        let logs = resources
            .database
            .progress()
            .list_workout_logs(user_id, limit)
            .await?;

        let total = logs.len();
        Ok((StatusCode::OK, Json(WorkoutLogListResponse { logs, total })).into_response())
    }
}
