// ABOUTME: Database operations for progress entries and workout logs
// ABOUTME: Weight, body measurements, photo URLs, and completed workout sessions per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_db_timestamp, parse_db_uuid, to_db_timestamp};
use crate::errors::{AppError, AppResult};
use pulse_core::models::{BodyMeasurements, ProgressEntry, WorkoutLog};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

/// Progress tracking database operations
pub struct ProgressManager {
    pool: SqlitePool,
}

impl ProgressManager {
    /// Create a new progress manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a progress entry
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn add_entry(&self, entry: &ProgressEntry) -> AppResult<()> {
        let measurements_json = serde_json::to_string(&entry.measurements)
            .map_err(|e| AppError::internal(format!("Failed to serialize measurements: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO progress_entries
                (id, user_id, recorded_at, weight_kg, body_fat_percent, measurements_json, photo_url, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(to_db_timestamp(entry.recorded_at))
        .bind(entry.weight_kg)
        .bind(entry.body_fat_percent)
        .bind(measurements_json)
        .bind(&entry.photo_url)
        .bind(&entry.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to add progress entry: {e}")))?;

        debug!(db.table = "progress_entries", user.id = %entry.user_id, entry.id = %entry.id, "Progress entry stored");
        Ok(())
    }

    /// Entries ordered by `recorded_at`, oldest first, capped at `limit`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_entries(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<ProgressEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, recorded_at, weight_kg, body_fat_percent, measurements_json, photo_url, notes
            FROM (
                SELECT *, rowid AS row_order FROM progress_entries
                WHERE user_id = $1
                ORDER BY recorded_at DESC, row_order DESC
                LIMIT $2
            )
            ORDER BY recorded_at ASC, row_order ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list progress entries: {e}")))?;

        rows.iter().map(row_to_entry).collect()
    }

    /// Every entry for the user, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn all_entries(&self, user_id: Uuid) -> AppResult<Vec<ProgressEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, recorded_at, weight_kg, body_fat_percent, measurements_json, photo_url, notes
            FROM progress_entries
            WHERE user_id = $1
            ORDER BY recorded_at ASC, rowid ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load progress history: {e}")))?;

        rows.iter().map(row_to_entry).collect()
    }

    /// Delete one entry owned by `user_id`, `false` when nothing matched
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_entry(&self, user_id: Uuid, entry_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM progress_entries WHERE id = $1 AND user_id = $2")
            .bind(entry_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete progress entry: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Store a completed workout
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn add_workout_log(&self, log: &WorkoutLog) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO workout_logs (id, user_id, workout_id, completed_at, duration_minutes, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(log.id.to_string())
        .bind(log.user_id.to_string())
        .bind(&log.workout_id)
        .bind(to_db_timestamp(log.completed_at))
        .bind(i64::from(log.duration_minutes))
        .bind(&log.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to add workout log: {e}")))?;

        debug!(db.table = "workout_logs", user.id = %log.user_id, workout.id = %log.workout_id, "Workout logged");
        Ok(())
    }

    /// Workout logs, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_workout_logs(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<WorkoutLog>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, workout_id, completed_at, duration_minutes, notes
            FROM workout_logs
            WHERE user_id = $1
            ORDER BY completed_at DESC, rowid DESC
            LIMIT $2
            ",
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list workout logs: {e}")))?;

        rows.iter()
            .map(|row| {
                let id: String = row.get("id");
                let user_id: String = row.get("user_id");
                let completed_at: String = row.get("completed_at");
                let duration: i64 = row.get("duration_minutes");
                Ok(WorkoutLog {
                    id: parse_db_uuid(&id)?,
                    user_id: parse_db_uuid(&user_id)?,
                    workout_id: row.get("workout_id"),
                    completed_at: parse_db_timestamp(&completed_at)?,
                    duration_minutes: u32::try_from(duration).map_err(|e| {
                        AppError::database(format!("Invalid stored duration {duration}: {e}"))
                    })?,
                    notes: row.get("notes"),
                })
            })
            .collect()
    }
}

fn row_to_entry(row: &SqliteRow) -> AppResult<ProgressEntry> {
    let id: String = row.get("id");
    let user_id: String = row.get("user_id");
    let recorded_at: String = row.get("recorded_at");
    let measurements_json: String = row.get("measurements_json");
    let measurements: BodyMeasurements = serde_json::from_str(&measurements_json)
        .map_err(|e| AppError::database(format!("Invalid stored measurements: {e}")))?;

    Ok(ProgressEntry {
        id: parse_db_uuid(&id)?,
        user_id: parse_db_uuid(&user_id)?,
        recorded_at: parse_db_timestamp(&recorded_at)?,
        weight_kg: row.get("weight_kg"),
        body_fat_percent: row.get("body_fat_percent"),
        measurements,
        photo_url: row.get("photo_url"),
        notes: row.get("notes"),
    })
}
