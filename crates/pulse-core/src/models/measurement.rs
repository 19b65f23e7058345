// ABOUTME: Body measurement input models for the fitness metrics calculator
// ABOUTME: Raw caller-supplied input plus the validated form with closed enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalize a free-text enum key: trimmed, lowercase, `-` and spaces become `_`
fn normalize_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male coefficients
    Male,
    /// Female coefficients
    Female,
}

impl Sex {
    /// Parse from a free-text key, `None` for unknown values
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Every level, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Parse from a free-text key, `None` for unknown values
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "sedentary" => Some(Self::Sedentary),
            "light" | "lightly_active" => Some(Self::Light),
            "moderate" | "moderately_active" => Some(Self::Moderate),
            "active" => Some(Self::Active),
            "very_active" | "veryactive" => Some(Self::VeryActive),
            _ => None,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

/// Dietary goal driving the calorie delta and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit
    Cutting,
    /// Caloric surplus
    Bulking,
    /// Caloric balance
    Maintenance,
}

impl FitnessGoal {
    /// Every goal
    pub const ALL: [Self; 3] = [Self::Cutting, Self::Bulking, Self::Maintenance];

    /// Parse from a free-text key, `None` for unknown values
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_key(s).as_str() {
            "cutting" | "cut" => Some(Self::Cutting),
            "bulking" | "bulk" => Some(Self::Bulking),
            "maintenance" | "maintain" => Some(Self::Maintenance),
            _ => None,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cutting => "cutting",
            Self::Bulking => "bulking",
            Self::Maintenance => "maintenance",
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

impl_display_via_as_str!(Sex, ActivityLevel, FitnessGoal);

/// Measurement input exactly as a caller supplies it
///
/// Every field is optional so the validator can name the first missing one.
/// Enum fields stay free text until validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MeasurementInput {
    /// Body weight in kilograms
    #[serde(default, alias = "weight")]
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    #[serde(default, alias = "height")]
    pub height_cm: Option<f64>,
    /// Age in years (signed so negative values can be reported, not silently dropped)
    #[serde(default, alias = "age")]
    pub age_years: Option<i64>,
    /// `male` or `female`
    #[serde(default, alias = "gender")]
    pub sex: Option<String>,
    /// `sedentary`, `light`, `moderate`, `active` or `very_active`
    #[serde(default, alias = "activity")]
    pub activity_level: Option<String>,
    /// `cutting`, `bulking` or `maintenance`
    #[serde(default)]
    pub goal: Option<String>,
    /// Smoker flag, defaults to false
    #[serde(default)]
    pub is_smoker: Option<bool>,
}

/// Validated measurement input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserMeasurementInput {
    /// Body weight in kilograms (> 0)
    pub weight_kg: f64,
    /// Height in centimeters (> 0)
    pub height_cm: f64,
    /// Age in years (> 0)
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Dietary goal
    pub goal: FitnessGoal,
    /// Smoker flag
    pub is_smoker: bool,
}

impl UserMeasurementInput {
    /// Height in meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }
}

impl From<&UserMeasurementInput> for MeasurementInput {
    fn from(input: &UserMeasurementInput) -> Self {
        Self {
            weight_kg: Some(input.weight_kg),
            height_cm: Some(input.height_cm),
            age_years: Some(i64::from(input.age_years)),
            sex: Some(input.sex.as_str().to_owned()),
            activity_level: Some(input.activity_level.as_str().to_owned()),
            goal: Some(input.goal.as_str().to_owned()),
            is_smoker: Some(input.is_smoker),
        }
    }
}
