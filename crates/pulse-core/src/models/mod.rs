// ABOUTME: Core data models and types for the Pulse fitness server
// ABOUTME: Re-exports measurement, metric, diet, catalog, progress, profile and chat types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! ## Core Models
//!
//! - `MeasurementInput` / `UserMeasurementInput`: raw and validated calculator input
//! - `MetricResult`: BMI, BMR, TDEE, calorie and macro targets
//! - `DietPlan`: five meal slots with recipe suggestions
//! - `Recipe`, `Workout`: static catalog records
//! - `ProgressEntry`, `WorkoutLog`: user tracking data
//! - `ChatMessage`: assistant conversation turns

mod conversation;
mod diet;
mod measurement;
mod metrics;
mod profile;
mod progress;
mod recipe;
mod workout;

pub use conversation::{ChatMessage, MessageRecord, MessageRole};
pub use diet::{DietPlan, MealSlot, MealSlotKind};
pub use measurement::{ActivityLevel, FitnessGoal, MeasurementInput, Sex, UserMeasurementInput};
pub use metrics::{BmiCategory, MetricResult, MetricWarning};
pub use profile::{UpdateProfileRequest, UserProfile};
pub use progress::{
    BodyMeasurements, NewProgressEntry, NewWorkoutLog, ProgressEntry, ProgressSummary,
    WeightTrend, WorkoutLog,
};
pub use recipe::{Macros, MealType, Recipe};
pub use workout::{DifficultyLevel, Exercise, Workout, WorkoutCategory};
