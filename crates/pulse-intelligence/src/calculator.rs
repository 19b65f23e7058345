// ABOUTME: Fitness metrics calculator using the revised Harris-Benedict equation
// ABOUTME: BMI, BMR, TDEE, goal-adjusted calorie target, and macronutrient grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness Metrics Calculator
//!
//! Deterministic single-pass arithmetic. Intermediate values are rounded the
//! same way at every step so results are reproducible across callers:
//!
//! 1. BMR (smoker factor applied) rounded to a whole kcal
//! 2. TDEE = rounded BMR x activity multiplier, rounded
//! 3. Target = TDEE + goal delta
//! 4. Protein and fat grams from body weight, rounded
//! 5. Carbs fill the remaining calories, rounded and clamped at zero
//!
//! # Scientific References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//! - Atwater factors: 4 kcal/g protein and carbohydrate, 9 kcal/g fat

use crate::classifier::{classify_bmi, recommendations, smoker_recommendations};
use crate::validator::validate;
use pulse_core::constants::nutrition::{activity, atwater, bmi, goals, harris_benedict};
use pulse_core::errors::ValidationError;
use pulse_core::models::{
    ActivityLevel, FitnessGoal, MeasurementInput, MetricResult, MetricWarning, Sex,
    UserMeasurementInput,
};
use tracing::{debug, warn};

/// Calorie delta and per-kg macro factors for one goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalAdjustment {
    /// Added to TDEE (kcal)
    pub calorie_delta: f64,
    /// Protein grams per kg bodyweight
    pub protein_g_per_kg: f64,
    /// Fat grams per kg bodyweight
    pub fat_g_per_kg: f64,
}

/// Round to a fixed number of decimal places, half away from zero
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Body Mass Index (unrounded)
///
/// Formula: BMI = `weight_kg` / `height_m`²
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal Metabolic Rate using the revised Harris-Benedict equation (unrounded)
///
/// - Men: 88.362 + 13.397 x W + 4.799 x H - 5.677 x A
/// - Women: 447.593 + 9.247 x W + 3.098 x H - 4.330 x A
///
/// Smokers get a fixed +7% metabolic adjustment.
#[must_use]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex, is_smoker: bool) -> f64 {
    let age = f64::from(age_years);

    let bmr = match sex {
        Sex::Male => harris_benedict::MALE_AGE_COEF.mul_add(
            -age,
            harris_benedict::MALE_HEIGHT_COEF.mul_add(
                height_cm,
                harris_benedict::MALE_WEIGHT_COEF.mul_add(weight_kg, harris_benedict::MALE_BASE),
            ),
        ),
        Sex::Female => harris_benedict::FEMALE_AGE_COEF.mul_add(
            -age,
            harris_benedict::FEMALE_HEIGHT_COEF.mul_add(
                height_cm,
                harris_benedict::FEMALE_WEIGHT_COEF
                    .mul_add(weight_kg, harris_benedict::FEMALE_BASE),
            ),
        ),
    };

    if is_smoker {
        bmr * harris_benedict::SMOKER_BMR_FACTOR
    } else {
        bmr
    }
}

/// TDEE multiplier for an activity level
///
/// sedentary 1.2, light 1.375, moderate 1.55, active 1.725, very active 1.9
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => activity::SEDENTARY,
        ActivityLevel::Light => activity::LIGHT,
        ActivityLevel::Moderate => activity::MODERATE,
        ActivityLevel::Active => activity::ACTIVE,
        ActivityLevel::VeryActive => activity::VERY_ACTIVE,
    }
}

/// Calorie delta and macro factors for a goal
///
/// Smokers get a smaller calorie delta and more protein; fat ignores the flag.
#[must_use]
pub const fn goal_adjustment(goal: FitnessGoal, is_smoker: bool) -> GoalAdjustment {
    match (goal, is_smoker) {
        (FitnessGoal::Cutting, false) => GoalAdjustment {
            calorie_delta: goals::CUTTING_DELTA,
            protein_g_per_kg: goals::CUTTING_PROTEIN,
            fat_g_per_kg: goals::CUTTING_FAT,
        },
        (FitnessGoal::Cutting, true) => GoalAdjustment {
            calorie_delta: goals::CUTTING_DELTA_SMOKER,
            protein_g_per_kg: goals::CUTTING_PROTEIN_SMOKER,
            fat_g_per_kg: goals::CUTTING_FAT,
        },
        (FitnessGoal::Bulking, false) => GoalAdjustment {
            calorie_delta: goals::BULKING_DELTA,
            protein_g_per_kg: goals::BULKING_PROTEIN,
            fat_g_per_kg: goals::BULKING_FAT,
        },
        (FitnessGoal::Bulking, true) => GoalAdjustment {
            calorie_delta: goals::BULKING_DELTA_SMOKER,
            protein_g_per_kg: goals::BULKING_PROTEIN_SMOKER,
            fat_g_per_kg: goals::BULKING_FAT,
        },
        (FitnessGoal::Maintenance, false) => GoalAdjustment {
            calorie_delta: 0.0,
            protein_g_per_kg: goals::MAINTENANCE_PROTEIN,
            fat_g_per_kg: goals::MAINTENANCE_FAT,
        },
        (FitnessGoal::Maintenance, true) => GoalAdjustment {
            calorie_delta: 0.0,
            protein_g_per_kg: goals::MAINTENANCE_PROTEIN_SMOKER,
            fat_g_per_kg: goals::MAINTENANCE_FAT,
        },
    }
}

/// Carbohydrate grams left after protein and fat (unrounded, may be negative)
#[must_use]
pub fn remaining_carbs_g(target_calories: f64, protein_g: f64, fat_g: f64) -> f64 {
    let protein_kcal = protein_g * atwater::PROTEIN_KCAL_PER_G;
    let fat_kcal = fat_g * atwater::FAT_KCAL_PER_G;
    (target_calories - protein_kcal - fat_kcal) / atwater::CARBS_KCAL_PER_G
}

/// Ideal weight at the fixed BMI anchor (unrounded)
#[must_use]
pub fn ideal_weight_kg(height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    bmi::IDEAL_BMI * height_m * height_m
}

/// Compute every metric for validated input
///
/// Negative carbohydrate remainders are clamped to zero and reported as
/// [`MetricWarning::CarbsClamped`].
#[must_use]
pub fn compute(input: &UserMeasurementInput) -> MetricResult {
    let bmi = round_to(calculate_bmi(input.weight_kg, input.height_cm), 1);

    let bmr = calculate_bmr(
        input.weight_kg,
        input.height_cm,
        input.age_years,
        input.sex,
        input.is_smoker,
    )
    .round();
    let tdee = (bmr * activity_multiplier(input.activity_level)).round();

    let adjustment = goal_adjustment(input.goal, input.is_smoker);
    let target_calories = tdee + adjustment.calorie_delta;
    let protein_g = (input.weight_kg * adjustment.protein_g_per_kg).round();
    let fat_g = (input.weight_kg * adjustment.fat_g_per_kg).round();

    let mut warnings = Vec::new();
    let carbs_remainder = remaining_carbs_g(target_calories, protein_g, fat_g);
    let carbs_g = if carbs_remainder < 0.0 {
        let unclamped_g = round_to(carbs_remainder, 1);
        warn!(
            calculator.target_calories = target_calories,
            calculator.carbs_unclamped_g = unclamped_g,
            "Protein and fat exceed calorie target, clamping carbohydrates to zero"
        );
        warnings.push(MetricWarning::CarbsClamped { unclamped_g });
        0.0
    } else {
        carbs_remainder.round().max(0.0)
    };

    let smoker_recommendations = if input.is_smoker {
        smoker_recommendations(input.goal)
    } else {
        Vec::new()
    };

    MetricResult {
        bmi,
        bmi_category: classify_bmi(bmi),
        bmr,
        tdee,
        target_calories,
        protein_g,
        carbs_g,
        fat_g,
        ideal_weight_kg: ideal_weight_kg(input.height_cm).round(),
        goal: input.goal,
        is_smoker: input.is_smoker,
        recommendations: recommendations(input.goal),
        smoker_recommendations,
        warnings,
    }
}

/// Validate raw input and compute metrics
///
/// This is the main entry point for callers holding unvalidated input.
///
/// # Errors
///
/// Returns the validator's error for missing or invalid fields, and
/// `ValidationError::Implausible` when the measurements produce a
/// non-positive BMR, TDEE, or calorie target.
pub fn calculate(input: &MeasurementInput) -> Result<MetricResult, ValidationError> {
    let validated = validate(input)?;
    let result = compute(&validated);

    if result.bmr <= 0.0 || result.tdee <= 0.0 {
        return Err(ValidationError::Implausible {
            reason: format!(
                "measurements produce a non-positive energy expenditure (BMR {} kcal, TDEE {} kcal)",
                result.bmr, result.tdee
            ),
        });
    }
    if result.target_calories <= 0.0 {
        return Err(ValidationError::Implausible {
            reason: format!(
                "measurements produce a non-positive calorie target ({} kcal)",
                result.target_calories
            ),
        });
    }

    debug!(
        calculator.goal = %validated.goal,
        calculator.activity = %validated.activity_level,
        calculator.smoker = validated.is_smoker,
        calculator.bmi = result.bmi,
        calculator.target_calories = result.target_calories,
        "Computed fitness metrics"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_one_decimal() {
        assert!((round_to(24.489_795, 1) - 24.5).abs() < f64::EPSILON);
        assert!((round_to(18.449, 1) - 18.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remaining_carbs_uses_atwater_factors() {
        // 2000 - 150*4 - 70*9 = 770 kcal -> 192.5 g
        assert!((remaining_carbs_g(2000.0, 150.0, 70.0) - 192.5).abs() < 1e-9);
    }

    #[test]
    fn test_fat_factor_ignores_smoker_flag() {
        for goal in FitnessGoal::ALL {
            assert!(
                (goal_adjustment(goal, true).fat_g_per_kg
                    - goal_adjustment(goal, false).fat_g_per_kg)
                    .abs()
                    < f64::EPSILON
            );
        }
    }
}
