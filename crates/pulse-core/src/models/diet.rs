// ABOUTME: Diet plan models derived from a metric result
// ABOUTME: Five fixed meal slots with calorie shares, recipe suggestions, and supplements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::measurement::FitnessGoal;
use super::recipe::{MealType, Recipe};
use serde::{Deserialize, Serialize};

/// Fixed meal slot of a diet plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlotKind {
    /// 07:00
    Breakfast,
    /// 10:00
    MorningSnack,
    /// 12:30
    Lunch,
    /// 16:00
    AfternoonSnack,
    /// 19:30
    Dinner,
}

impl MealSlotKind {
    /// Slots in time order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::MorningSnack,
        Self::Lunch,
        Self::AfternoonSnack,
        Self::Dinner,
    ];

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::MorningSnack => "Morning Snack",
            Self::Lunch => "Lunch",
            Self::AfternoonSnack => "Afternoon Snack",
            Self::Dinner => "Dinner",
        }
    }

    /// Fixed time label (24h)
    #[must_use]
    pub const fn time(&self) -> &'static str {
        match self {
            Self::Breakfast => "07:00",
            Self::MorningSnack => "10:00",
            Self::Lunch => "12:30",
            Self::AfternoonSnack => "16:00",
            Self::Dinner => "19:30",
        }
    }

    /// Recipe tag used to fill the slot
    #[must_use]
    pub const fn meal_type(&self) -> MealType {
        match self {
            Self::Breakfast => MealType::Breakfast,
            Self::MorningSnack | Self::AfternoonSnack => MealType::Snack,
            Self::Lunch => MealType::Lunch,
            Self::Dinner => MealType::Dinner,
        }
    }
}

/// One meal slot of a diet plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSlot {
    /// Which slot
    pub kind: MealSlotKind,
    /// Display name
    pub name: String,
    /// Time label (`07:00`)
    pub time: String,
    /// Share of daily calories (percent)
    pub percent: u8,
    /// Calorie target for the slot (whole kcal)
    pub target_calories: f64,
    /// Suggested recipes, catalog order
    pub recipes: Vec<Recipe>,
}

/// Daily diet plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Goal the plan was built for
    pub goal: FitnessGoal,
    /// Daily calorie target, equal to the sum of slot targets
    pub total_calories: f64,
    /// Daily protein (grams)
    pub protein_g: f64,
    /// Daily carbohydrates (grams)
    pub carbs_g: f64,
    /// Daily fat (grams)
    pub fat_g: f64,
    /// Meal slots in time order
    pub meals: Vec<MealSlot>,
    /// Goal-based supplement suggestions
    pub supplements: Vec<String>,
}
