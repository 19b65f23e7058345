// ABOUTME: User profile route handlers
// ABOUTME: Read and replace display name, height, sex, activity level, and goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::parse_user_id;
use crate::{constants::limits, errors::AppError, resources::ServerResources};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pulse_core::models::UpdateProfileRequest;
use std::sync::Arc;
use tracing::info;

/// Profile routes implementation
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/profile",
                get(Self::get_profile).put(Self::update_profile),
            )
            .with_state(resources)
    }

    async fn get_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let profile = resources
            .database
            .profiles()
            .get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Profile for user {user_id}")))?;

        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    async fn update_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(mut request): Json<UpdateProfileRequest>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        validate_profile(&mut request)?;

        let profile = resources
            .database
            .profiles()
            .upsert_profile(user_id, &request)
            .await?;

        info!(user.id = %user_id, "Profile updated");
        Ok((StatusCode::OK, Json(profile)).into_response())
    }
}

/// Trim the display name and reject out-of-range values
fn validate_profile(request: &mut UpdateProfileRequest) -> Result<(), AppError> {
    request.display_name = request
        .display_name
        .take()
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty());

    if let Some(name) = &request.display_name {
        if name.chars().count() > limits::MAX_DISPLAY_NAME_CHARS {
            return Err(AppError::invalid_input(format!(
                "Display name must be at most {} characters",
                limits::MAX_DISPLAY_NAME_CHARS
            ))
            .with_details(serde_json::json!({ "field": "display_name" })));
        }
    }

    if let Some(height) = request.height_cm {
        if !height.is_finite() || height <= 0.0 {
            return Err(AppError::invalid_input("Height must be a positive number")
                .with_details(serde_json::json!({ "field": "height_cm" })));
        }
    }

    Ok(())
}
