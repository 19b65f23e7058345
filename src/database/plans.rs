// ABOUTME: Database operations for saved calculator results and diet plans
// ABOUTME: Stores metric and plan snapshots as JSON and lists them newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_db_timestamp, parse_db_uuid, to_db_timestamp};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use pulse_core::models::{DietPlan, MetricResult};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

/// A calculator result and diet plan saved by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Metrics at save time
    pub metrics: MetricResult,
    /// Diet plan at save time
    pub diet_plan: DietPlan,
    /// Save time
    pub created_at: DateTime<Utc>,
}

/// Saved plan database operations
pub struct PlanManager {
    pool: SqlitePool,
}

impl PlanManager {
    /// Create a new plan manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Save a snapshot of `metrics` and `diet_plan`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn save_plan(
        &self,
        user_id: Uuid,
        metrics: &MetricResult,
        diet_plan: &DietPlan,
    ) -> AppResult<SavedPlan> {
        let plan = SavedPlan {
            id: Uuid::new_v4(),
            user_id,
            metrics: metrics.clone(),
            diet_plan: diet_plan.clone(),
            created_at: Utc::now(),
        };

        let metrics_json = serde_json::to_string(&plan.metrics)
            .map_err(|e| AppError::internal(format!("Failed to serialize metrics: {e}")))?;
        let diet_plan_json = serde_json::to_string(&plan.diet_plan)
            .map_err(|e| AppError::internal(format!("Failed to serialize diet plan: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO saved_plans (id, user_id, metrics_json, diet_plan_json, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(plan.id.to_string())
        .bind(user_id.to_string())
        .bind(metrics_json)
        .bind(diet_plan_json)
        .bind(to_db_timestamp(plan.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save plan: {e}")))?;

        debug!(db.table = "saved_plans", user.id = %user_id, plan.id = %plan.id, "Plan saved");
        Ok(plan)
    }

    /// Most recently saved plan
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn latest_plan(&self, user_id: Uuid) -> AppResult<Option<SavedPlan>> {
        Ok(self.list_plans(user_id, 1).await?.into_iter().next())
    }

    /// Saved plans, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_plans(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<SavedPlan>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, metrics_json, diet_plan_json, created_at
            FROM saved_plans
            WHERE user_id = $1
            ORDER BY created_at DESC, rowid DESC
            LIMIT $2
            ",
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list plans: {e}")))?;

        rows.iter().map(row_to_plan).collect()
    }
}

fn row_to_plan(row: &SqliteRow) -> AppResult<SavedPlan> {
    let id: String = row.get("id");
    let user_id: String = row.get("user_id");
    let metrics_json: String = row.get("metrics_json");
    let diet_plan_json: String = row.get("diet_plan_json");
    let created_at: String = row.get("created_at");

    Ok(SavedPlan {
        id: parse_db_uuid(&id)?,
        user_id: parse_db_uuid(&user_id)?,
        metrics: serde_json::from_str(&metrics_json)
            .map_err(|e| AppError::database(format!("Invalid stored metrics: {e}")))?,
        diet_plan: serde_json::from_str(&diet_plan_json)
            .map_err(|e| AppError::database(format!("Invalid stored diet plan: {e}")))?,
        created_at: parse_db_timestamp(&created_at)?,
    })
}
