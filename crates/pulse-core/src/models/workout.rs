// ABOUTME: Workout catalog models with category and difficulty classification
// ABOUTME: Workout, Exercise, WorkoutCategory, and DifficultyLevel definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Training category of a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCategory {
    /// Resistance training
    Strength,
    /// Steady-state cardiovascular work
    Cardio,
    /// High-intensity interval training
    Hiit,
    /// Stretching and mobility
    Flexibility,
    /// Core stability
    Core,
}

impl WorkoutCategory {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Hiit => "hiit",
            Self::Flexibility => "flexibility",
            Self::Core => "core",
        }
    }

    /// Parse from string, `None` for unknown values
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Some(Self::Strength),
            "cardio" => Some(Self::Cardio),
            "hiit" => Some(Self::Hiit),
            "flexibility" | "mobility" => Some(Self::Flexibility),
            "core" => Some(Self::Core),
            _ => None,
        }
    }
}

/// Difficulty level for workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Suitable for beginners with no prior experience
    Beginner,
    /// Requires some training history
    Intermediate,
    /// For experienced trainees
    Advanced,
}

impl DifficultyLevel {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse from string, `None` for unknown values
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// Single exercise within a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set (`12`, `8-10`, `AMRAP`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Work duration per set in seconds (timed exercises)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
}

/// A workout from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Stable identifier (`w-001`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Training category
    pub category: WorkoutCategory,
    /// Difficulty
    pub difficulty: DifficultyLevel,
    /// Total session length in minutes
    pub duration_minutes: u32,
    /// Rough energy cost of one session (kcal)
    pub estimated_calories: u32,
    /// Primary muscles worked
    pub target_muscles: Vec<String>,
    /// Equipment needed, empty for bodyweight
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Ordered exercises
    pub exercises: Vec<Exercise>,
}
