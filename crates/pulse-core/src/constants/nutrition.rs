// ABOUTME: Nutrition formula constants for the fitness metrics calculator
// ABOUTME: Harris-Benedict coefficients, activity multipliers, goal deltas, Atwater factors, meal shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition formula constants
//!
//! # Scientific References
//!
//! - Harris, J.A., & Benedict, F.G. (1918). A biometric study of human basal metabolism.
//!   Revised by Roza, A.M., & Shizgal, H.M. (1984). *American Journal of Clinical
//!   Nutrition*, 40(1), 168-182. <https://doi.org/10.1093/ajcn/40.1.168>
//! - Activity multipliers: `McArdle` et al. (2010) - Exercise Physiology
//!
//! The smoker adjustments are fixed product constants with no cited source.

/// Bounds on accepted measurement input
pub mod input {
    /// Oldest accepted age (years)
    pub const MAX_AGE_YEARS: i64 = 130;
}

/// Revised Harris-Benedict equation (metric units)
pub mod harris_benedict {
    /// Male intercept
    pub const MALE_BASE: f64 = 88.362;
    /// Male weight coefficient (per kg)
    pub const MALE_WEIGHT_COEF: f64 = 13.397;
    /// Male height coefficient (per cm)
    pub const MALE_HEIGHT_COEF: f64 = 4.799;
    /// Male age coefficient (per year, subtracted)
    pub const MALE_AGE_COEF: f64 = 5.677;

    /// Female intercept
    pub const FEMALE_BASE: f64 = 447.593;
    /// Female weight coefficient (per kg)
    pub const FEMALE_WEIGHT_COEF: f64 = 9.247;
    /// Female height coefficient (per cm)
    pub const FEMALE_HEIGHT_COEF: f64 = 3.098;
    /// Female age coefficient (per year, subtracted)
    pub const FEMALE_AGE_COEF: f64 = 4.330;

    /// Metabolic multiplier applied to BMR for smokers (+7%)
    pub const SMOKER_BMR_FACTOR: f64 = 1.07;
}

/// TDEE activity multipliers
pub mod activity {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Very hard exercise or physical job
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Goal-dependent calorie deltas and macro factors (grams per kg bodyweight)
pub mod goals {
    /// Cutting deficit (kcal)
    pub const CUTTING_DELTA: f64 = -500.0;
    /// Cutting deficit for smokers (kcal)
    pub const CUTTING_DELTA_SMOKER: f64 = -300.0;
    /// Bulking surplus (kcal)
    pub const BULKING_DELTA: f64 = 500.0;
    /// Bulking surplus for smokers (kcal)
    pub const BULKING_DELTA_SMOKER: f64 = 300.0;

    /// Cutting protein (g/kg)
    pub const CUTTING_PROTEIN: f64 = 2.2;
    /// Cutting protein for smokers (g/kg)
    pub const CUTTING_PROTEIN_SMOKER: f64 = 2.5;
    /// Bulking protein (g/kg)
    pub const BULKING_PROTEIN: f64 = 2.5;
    /// Bulking protein for smokers (g/kg)
    pub const BULKING_PROTEIN_SMOKER: f64 = 3.0;
    /// Maintenance protein (g/kg)
    pub const MAINTENANCE_PROTEIN: f64 = 2.0;
    /// Maintenance protein for smokers (g/kg)
    pub const MAINTENANCE_PROTEIN_SMOKER: f64 = 2.2;

    /// Cutting fat (g/kg), smoker status ignored
    pub const CUTTING_FAT: f64 = 0.8;
    /// Bulking fat (g/kg), smoker status ignored
    pub const BULKING_FAT: f64 = 1.2;
    /// Maintenance fat (g/kg), smoker status ignored
    pub const MAINTENANCE_FAT: f64 = 1.0;
}

/// Atwater energy factors (kcal per gram)
pub mod atwater {
    /// Protein kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// BMI band boundaries (lower bound inclusive for the upper band)
pub mod bmi {
    /// Normal band starts here
    pub const NORMAL_MIN: f64 = 18.5;
    /// Overweight band starts here
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Obese band starts here
    pub const OBESE_MIN: f64 = 30.0;
    /// BMI anchor used for the ideal weight estimate
    pub const IDEAL_BMI: f64 = 22.0;
}

/// Diet plan meal slot shares (percent of target calories)
pub mod meal_slots {
    /// Breakfast share
    pub const BREAKFAST_PERCENT: u8 = 25;
    /// Morning snack share
    pub const MORNING_SNACK_PERCENT: u8 = 10;
    /// Lunch share
    pub const LUNCH_PERCENT: u8 = 30;
    /// Afternoon snack share
    pub const AFTERNOON_SNACK_PERCENT: u8 = 10;
    /// Dinner share
    pub const DINNER_PERCENT: u8 = 25;
    /// Recipes attached to a main meal slot
    pub const MAIN_MEAL_RECIPES: usize = 3;
    /// Recipes attached to a snack slot
    pub const SNACK_RECIPES: usize = 2;
}
