// ABOUTME: Metric result models produced by the fitness calculator
// ABOUTME: BMI category, calorie and macro targets, recommendations, and calculation warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::measurement::FitnessGoal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI band, half-open intervals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conditions flagged during calculation instead of silently corrected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetricWarning {
    /// Protein and fat targets exceeded the calorie target; carbs were clamped to zero
    CarbsClamped {
        /// Carbohydrate grams before clamping (negative)
        unclamped_g: f64,
    },
}

/// Output of one calculator run
///
/// Built fresh for every invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Body Mass Index, one decimal
    pub bmi: f64,
    /// BMI band
    pub bmi_category: BmiCategory,
    /// Basal Metabolic Rate (kcal/day, whole number)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day, whole number)
    pub tdee: f64,
    /// Goal-adjusted daily calorie target (kcal/day)
    pub target_calories: f64,
    /// Daily protein (grams)
    pub protein_g: f64,
    /// Daily carbohydrates (grams, never negative)
    pub carbs_g: f64,
    /// Daily fat (grams)
    pub fat_g: f64,
    /// Weight at BMI 22 for the given height (kg)
    pub ideal_weight_kg: f64,
    /// Goal used for the calculation
    pub goal: FitnessGoal,
    /// Smoker flag used for the calculation
    pub is_smoker: bool,
    /// Goal-dependent tips
    pub recommendations: Vec<String>,
    /// Smoker caveats, empty for non-smokers
    pub smoker_recommendations: Vec<String>,
    /// Conditions flagged during calculation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<MetricWarning>,
}
