// ABOUTME: User profile fields kept alongside calculator results
// ABOUTME: Display name and default body/goal settings keyed by an external user id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::measurement::{ActivityLevel, FitnessGoal, Sex};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile of a user identified by the external identity provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// External user id
    pub user_id: Uuid,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Biological sex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Usual activity level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Current dietary goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating or replacing a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Biological sex
    #[serde(default)]
    pub sex: Option<Sex>,
    /// Usual activity level
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Current dietary goal
    #[serde(default)]
    pub goal: Option<FitnessGoal>,
}
