// ABOUTME: Catalog route handlers for browsing recipes and workouts
// ABOUTME: Query-string filters over the in-memory catalogs plus lookups by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{errors::AppError, resources::ServerResources};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pulse_core::models::{DifficultyLevel, FitnessGoal, Recipe, Workout, WorkoutCategory};
use pulse_intelligence::{RecipeFilter, WorkoutFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default number of workouts suggested for a goal
const DEFAULT_SUGGESTIONS: usize = 3;

/// Query parameters for listing workouts
#[derive(Debug, Default, Deserialize)]
pub struct WorkoutQuery {
    /// Only this category
    #[serde(default)]
    pub category: Option<WorkoutCategory>,
    /// Only this difficulty
    #[serde(default)]
    pub difficulty: Option<DifficultyLevel>,
    /// Session length at most (minutes)
    #[serde(default)]
    pub max_duration_minutes: Option<u32>,
    /// Suggest sessions for this goal instead of filtering
    #[serde(default)]
    pub goal: Option<FitnessGoal>,
    /// Number of suggestions when `goal` is set
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Recipe list response
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeListResponse {
    /// Matching recipes in catalog order
    pub recipes: Vec<Recipe>,
    /// Number of matches
    pub total: usize,
}

/// Workout list response
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutListResponse {
    /// Matching workouts
    pub workouts: Vec<Workout>,
    /// Number of matches
    pub total: usize,
}

/// Catalog routes implementation
pub struct CatalogRoutes;

impl CatalogRoutes {
    /// Create all catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes", get(Self::list_recipes))
            .route("/api/recipes/:recipe_id", get(Self::get_recipe))
            .route("/api/workouts", get(Self::list_workouts))
            .route("/api/workouts/:workout_id", get(Self::get_workout))
            .with_state(resources)
    }

    async fn list_recipes(
        State(resources): State<Arc<ServerResources>>,
        Query(filter): Query<RecipeFilter>,
    ) -> Result<Response, AppError> {
        let recipes: Vec<Recipe> = resources.recipes.filter(&filter).into_iter().cloned().collect();
        let total = recipes.len();
        Ok((StatusCode::OK, Json(RecipeListResponse { recipes, total })).into_response())
    }

    async fn get_recipe(
        State(resources): State<Arc<ServerResources>>,
        Path(recipe_id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = resources
            .recipes
            .get(&recipe_id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    async fn list_workouts(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<WorkoutQuery>,
    ) -> Result<Response, AppError> {
        let workouts: Vec<Workout> = if let Some(goal) = query.goal {
            resources
                .workouts
                .suggest_for_goal(goal, query.limit.unwrap_or(DEFAULT_SUGGESTIONS))
                .into_iter()
                .cloned()
                .collect()
        } else {
            let filter = WorkoutFilter {
                category: query.category,
                difficulty: query.difficulty,
                max_duration_minutes: query.max_duration_minutes,
            };
            resources.workouts.filter(&filter).into_iter().cloned().collect()
        };

        let total = workouts.len();
        Ok((StatusCode::OK, Json(WorkoutListResponse { workouts, total })).into_response())
    }

    async fn get_workout(
        State(resources): State<Arc<ServerResources>>,
        Path(workout_id): Path<String>,
    ) -> Result<Response, AppError> {
        let workout = resources
            .workouts
            .get(&workout_id)
            .ok_or_else(|| AppError::not_found(format!("Workout {workout_id}")))?;
        Ok((StatusCode::OK, Json(workout)).into_response())
    }
}
