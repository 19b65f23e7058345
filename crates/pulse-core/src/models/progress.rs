// ABOUTME: Progress tracking models for weight, body measurements, photos, and workout logs
// ABOUTME: Stored entries, creation requests with validation, and trend summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::metrics::BmiCategory;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Circumference measurements in centimeters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Chest circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest_cm: Option<f64>,
    /// Waist circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips_cm: Option<f64>,
    /// Upper arm circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_cm: Option<f64>,
    /// Thigh circumference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thigh_cm: Option<f64>,
}

impl BodyMeasurements {
    fn fields(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("chest_cm", self.chest_cm),
            ("waist_cm", self.waist_cm),
            ("hips_cm", self.hips_cm),
            ("arm_cm", self.arm_cm),
            ("thigh_cm", self.thigh_cm),
        ]
    }

    /// Whether no measurement is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_none())
    }
}

/// Stored progress entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// When the measurement was taken
    pub recorded_at: DateTime<Utc>,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Circumference measurements
    #[serde(default)]
    pub measurements: BodyMeasurements,
    /// Public URL of a progress photo held in external object storage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request payload for logging progress
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProgressEntry {
    /// When the measurement was taken, defaults to now
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body fat percentage
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    /// Circumference measurements
    #[serde(default)]
    pub measurements: BodyMeasurements,
    /// Photo URL returned by the storage provider
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewProgressEntry {
    /// Validate ranges and the photo URL scheme
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` naming the offending field
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(field_error("weight_kg", "Weight must be a positive number"));
        }
        if let Some(fat) = self.body_fat_percent {
            if !fat.is_finite() || fat <= 0.0 || fat >= 100.0 {
                return Err(field_error(
                    "body_fat_percent",
                    "Body fat must be between 0 and 100 percent",
                ));
            }
        }
        for (name, value) in self.measurements.fields() {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(field_error(name, "Measurements must be positive"));
                }
            }
        }
        if let Some(url) = &self.photo_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(field_error("photo_url", "Photo URL must be http(s)"));
            }
        }
        Ok(())
    }

    /// Turn the request into a stored entry
    #[must_use]
    pub fn into_entry(self, user_id: Uuid) -> ProgressEntry {
        ProgressEntry {
            id: Uuid::new_v4(),
            user_id,
            recorded_at: self.recorded_at.unwrap_or_else(Utc::now),
            weight_kg: self.weight_kg,
            body_fat_percent: self.body_fat_percent,
            measurements: self.measurements,
            photo_url: self.photo_url,
            notes: self.notes,
        }
    }
}

fn field_error(field: &str, message: &str) -> AppError {
    AppError::invalid_input(message).with_details(serde_json::json!({ "field": field }))
}

/// Direction of the weight trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightTrend {
    /// Weight going down
    Losing,
    /// Weight going up
    Gaining,
    /// Change within the maintenance threshold
    Maintaining,
}

/// Summary of a user's logged progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Number of entries analyzed
    pub entry_count: usize,
    /// First logged weight (kg)
    pub starting_weight_kg: Option<f64>,
    /// Most recent weight (kg)
    pub current_weight_kg: Option<f64>,
    /// Current minus starting weight (kg)
    pub total_change_kg: Option<f64>,
    /// Change over the recent window (kg)
    pub recent_change_kg: Option<f64>,
    /// Trend over the recent window
    pub trend: Option<WeightTrend>,
    /// BMI from the current weight when height is known
    pub current_bmi: Option<f64>,
    /// Band of `current_bmi`
    pub bmi_category: Option<BmiCategory>,
    /// Latest minus earliest waist measurement (cm)
    pub waist_change_cm: Option<f64>,
    /// Timestamp of the latest entry
    pub last_recorded_at: Option<DateTime<Utc>>,
}

/// A completed workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Log identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Catalog workout id
    pub workout_id: String,
    /// When the session finished
    pub completed_at: DateTime<Utc>,
    /// Actual session length (minutes)
    pub duration_minutes: u32,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request payload for logging a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkoutLog {
    /// Catalog workout id
    pub workout_id: String,
    /// When the session finished, defaults to now
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Actual session length, defaults to the catalog duration
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}
