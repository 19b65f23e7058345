// ABOUTME: Diet plan allocation across five fixed meal slots
// ABOUTME: Splits target calories by fixed shares and attaches catalog recipes by meal type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diet Allocator
//!
//! | Slot | Time | Share | Recipes |
//! |------|------|-------|---------|
//! | Breakfast | 07:00 | 25% | 3 breakfast |
//! | Morning snack | 10:00 | 10% | 2 snack |
//! | Lunch | 12:30 | 30% | 3 lunch |
//! | Afternoon snack | 16:00 | 10% | 2 snack |
//! | Dinner | 19:30 | 25% | 3 dinner |
//!
//! Recipes are the first N catalog entries for the slot's meal type. They are
//! suggestions, not matched to the slot's calorie target.

use crate::catalog::RecipeCatalog;
use pulse_core::constants::nutrition::meal_slots;
use pulse_core::models::{DietPlan, FitnessGoal, MealSlot, MealSlotKind, MetricResult};
use tracing::debug;

/// Share of daily calories for a slot (percent)
#[must_use]
pub const fn slot_percent(kind: MealSlotKind) -> u8 {
    match kind {
        MealSlotKind::Breakfast => meal_slots::BREAKFAST_PERCENT,
        MealSlotKind::MorningSnack => meal_slots::MORNING_SNACK_PERCENT,
        MealSlotKind::Lunch => meal_slots::LUNCH_PERCENT,
        MealSlotKind::AfternoonSnack => meal_slots::AFTERNOON_SNACK_PERCENT,
        MealSlotKind::Dinner => meal_slots::DINNER_PERCENT,
    }
}

/// Number of recipes attached to a slot
#[must_use]
pub const fn slot_recipe_count(kind: MealSlotKind) -> usize {
    match kind {
        MealSlotKind::MorningSnack | MealSlotKind::AfternoonSnack => meal_slots::SNACK_RECIPES,
        MealSlotKind::Breakfast | MealSlotKind::Lunch | MealSlotKind::Dinner => {
            meal_slots::MAIN_MEAL_RECIPES
        }
    }
}

/// Goal-based supplement suggestions
#[must_use]
pub fn supplements(goal: FitnessGoal) -> Vec<String> {
    let names: &[&str] = match goal {
        FitnessGoal::Cutting => &[
            "Whey Protein Isolate",
            "Green Tea Extract",
            "Multivitamin",
            "Omega-3 Fish Oil",
        ],
        FitnessGoal::Bulking => &[
            "Whey Protein",
            "Creatine Monohydrate",
            "Mass Gainer",
            "Multivitamin",
            "Omega-3 Fish Oil",
        ],
        FitnessGoal::Maintenance => &["Multivitamin", "Omega-3 Fish Oil", "Vitamin D3"],
    };
    names.iter().map(|&n| n.to_owned()).collect()
}

/// Split calories into whole-kcal slot targets that sum exactly to the total
///
/// Every slot but the last gets `round(total x share)`; the last slot takes
/// the remainder.
#[must_use]
pub fn split_calories(total_calories: f64) -> Vec<(MealSlotKind, f64)> {
    let mut allocated = 0.0;
    let last = MealSlotKind::ALL.len() - 1;

    MealSlotKind::ALL
        .iter()
        .enumerate()
        .map(|(index, &kind)| {
            let calories = if index == last {
                total_calories - allocated
            } else {
                (total_calories * f64::from(slot_percent(kind)) / 100.0).round()
            };
            allocated += calories;
            (kind, calories)
        })
        .collect()
}

/// Build a diet plan from a metric result
#[must_use]
pub fn allocate_diet(metrics: &MetricResult, catalog: &RecipeCatalog) -> DietPlan {
    let meals: Vec<MealSlot> = split_calories(metrics.target_calories)
        .into_iter()
        .map(|(kind, target_calories)| MealSlot {
            kind,
            name: kind.label().to_owned(),
            time: kind.time().to_owned(),
            percent: slot_percent(kind),
            target_calories,
            recipes: catalog
                .by_meal_type(kind.meal_type())
                .take(slot_recipe_count(kind))
                .cloned()
                .collect(),
        })
        .collect();

    debug!(
        diet.goal = %metrics.goal,
        diet.total_calories = metrics.target_calories,
        diet.meals = meals.len(),
        "Allocated diet plan"
    );

    DietPlan {
        goal: metrics.goal,
        total_calories: metrics.target_calories,
        protein_g: metrics.protein_g,
        carbs_g: metrics.carbs_g,
        fat_g: metrics.fat_g,
        meals,
        supplements: supplements(metrics.goal),
    }
}
