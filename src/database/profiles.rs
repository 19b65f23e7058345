// ABOUTME: Database operations for user profiles
// ABOUTME: Upsert and lookup of display name, height, sex, activity level, and goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_db_timestamp, to_db_timestamp};
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use pulse_core::models::{ActivityLevel, FitnessGoal, Sex, UpdateProfileRequest, UserProfile};
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

/// Profile database operations
pub struct ProfileManager {
    pool: SqlitePool,
}

impl ProfileManager {
    /// Create a new profile manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create or replace the profile of `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub async fn upsert_profile(
        &self,
        user_id: Uuid,
        request: &UpdateProfileRequest,
    ) -> AppResult<UserProfile> {
        let profile = UserProfile {
            user_id,
            display_name: request.display_name.clone(),
            height_cm: request.height_cm,
            sex: request.sex,
            activity_level: request.activity_level,
            goal: request.goal,
            updated_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO user_profiles (user_id, display_name, height_cm, sex, activity_level, goal, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT(user_id) DO UPDATE SET
                display_name = excluded.display_name,
                height_cm = excluded.height_cm,
                sex = excluded.sex,
                activity_level = excluded.activity_level,
                goal = excluded.goal,
                updated_at = excluded.updated_at
            ",
        )
        .bind(user_id.to_string())
        .bind(&profile.display_name)
        .bind(profile.height_cm)
        .bind(profile.sex.map(|s| s.as_str()))
        .bind(profile.activity_level.map(|a| a.as_str()))
        .bind(profile.goal.map(|g| g.as_str()))
        .bind(to_db_timestamp(profile.updated_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save profile: {e}")))?;

        debug!(db.table = "user_profiles", user.id = %user_id, "Profile saved");
        Ok(profile)
    }

    /// Fetch the profile of `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        let row = sqlx::query(
            r"
            SELECT display_name, height_cm, sex, activity_level, goal, updated_at
            FROM user_profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get profile: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let sex: Option<String> = row.get("sex");
        let activity_level: Option<String> = row.get("activity_level");
        let goal: Option<String> = row.get("goal");
        let updated_at: String = row.get("updated_at");

        Ok(Some(UserProfile {
            user_id,
            display_name: row.get("display_name"),
            height_cm: row.get("height_cm"),
            sex: sex.as_deref().and_then(Sex::parse),
            activity_level: activity_level.as_deref().and_then(ActivityLevel::parse),
            goal: goal.as_deref().and_then(FitnessGoal::parse),
            updated_at: parse_db_timestamp(&updated_at)?,
        }))
    }
}
