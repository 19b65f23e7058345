// ABOUTME: SQLite database connection, migrations, and per-domain managers
// ABOUTME: Profiles, saved plans, progress entries, workout logs, and assistant chat history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! `Database` owns the connection pool and runs idempotent
//! `CREATE TABLE IF NOT EXISTS` migrations on startup. Each domain has a
//! small manager holding a pool clone. Timestamps are stored as fixed-width
//! RFC 3339 strings so text ordering matches time ordering.

mod chat;
mod plans;
mod profiles;
mod progress;

pub use chat::ChatManager;
pub use plans::{PlanManager, SavedPlan};
pub use profiles::ProfileManager;
pub use progress::ProgressManager;

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// Database manager for all persisted user data
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect and run migrations
    ///
    /// File databases are created if missing, along with their parent directory.
    ///
    /// # Errors
    ///
    /// Returns `DATABASE_ERROR` if the connection or a migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let connection_options = if database_url.contains(":memory:") {
            database_url.to_owned()
        } else {
            ensure_parent_dir(database_url).await?;
            if database_url.contains('?') {
                database_url.to_owned()
            } else {
                format!("{database_url}?mode=rwc")
            }
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Profile operations
    #[must_use]
    pub fn profiles(&self) -> ProfileManager {
        ProfileManager::new(self.pool.clone())
    }

    /// Saved plan operations
    #[must_use]
    pub fn plans(&self) -> PlanManager {
        PlanManager::new(self.pool.clone())
    }

    /// Progress and workout log operations
    #[must_use]
    pub fn progress(&self) -> ProgressManager {
        ProgressManager::new(self.pool.clone())
    }

    /// Chat history operations
    #[must_use]
    pub fn chat(&self) -> ChatManager {
        ChatManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns `DATABASE_ERROR` if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        for statement in MIGRATIONS {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;
        }
        info!(db.migrations = MIGRATIONS.len(), "Database schema ready");
        Ok(())
    }
}

const MIGRATIONS: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS user_profiles (
        user_id TEXT PRIMARY KEY,
        display_name TEXT,
        height_cm REAL,
        sex TEXT,
        activity_level TEXT,
        goal TEXT,
        updated_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS saved_plans (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        metrics_json TEXT NOT NULL,
        diet_plan_json TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_saved_plans_user ON saved_plans(user_id, created_at)",
    r"
    CREATE TABLE IF NOT EXISTS progress_entries (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        recorded_at TEXT NOT NULL,
        weight_kg REAL NOT NULL,
        body_fat_percent REAL,
        measurements_json TEXT NOT NULL DEFAULT '{}',
        photo_url TEXT,
        notes TEXT
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_progress_user ON progress_entries(user_id, recorded_at)",
    r"
    CREATE TABLE IF NOT EXISTS workout_logs (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        workout_id TEXT NOT NULL,
        completed_at TEXT NOT NULL,
        duration_minutes INTEGER NOT NULL,
        notes TEXT
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_workout_logs_user ON workout_logs(user_id, completed_at)",
    r"
    CREATE TABLE IF NOT EXISTS chat_messages (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        role TEXT NOT NULL CHECK (role IN ('user', 'assistant')),
        content TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_chat_messages_user ON chat_messages(user_id, created_at)",
];

async fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create database directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Fixed-width UTC timestamp for storage
pub(crate) fn to_db_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_db_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid stored timestamp '{value}': {e}")))
}

pub(crate) fn parse_db_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| AppError::database(format!("Invalid stored id '{value}': {e}")))
}

/// Clamp a caller-supplied list limit into `1..=max`
#[must_use]
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}
