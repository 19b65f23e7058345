// ABOUTME: Recipe catalog record and meal type tag
// ABOUTME: Static reference data browsed by meal type and attached to diet plan slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of meal a recipe is tagged for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string, `None` for unknown values
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" => Some(Self::Snack),
            _ => None,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macronutrients per serving
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein_g: f64,
    /// Carbohydrates per serving (grams)
    pub carbs_g: f64,
    /// Fat per serving (grams)
    pub fat_g: f64,
}

/// A recipe from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier (`r-001`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Meal slot this recipe is tagged for
    pub meal_type: MealType,
    /// Nutrition per serving
    pub macros: Macros,
    /// Preparation time in minutes
    pub prep_time_minutes: u32,
    /// Ingredient lines with quantities
    pub ingredients: Vec<String>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
    /// Free-form tags (`high_protein`, `vegetarian`, ...)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Whether the recipe carries a tag (case-insensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
