// ABOUTME: BMI band classification and goal-dependent recommendation texts
// ABOUTME: Static tip tables for each goal plus smoker-specific caveats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::constants::nutrition::bmi;
use pulse_core::models::{BmiCategory, FitnessGoal};

/// Map a BMI value to its band
///
/// Bands are half-open: 18.5, 25 and 30 fall into the upper band.
#[must_use]
pub fn classify_bmi(bmi_value: f64) -> BmiCategory {
    if bmi_value < bmi::NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi_value < bmi::OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi_value < bmi::OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

const CUTTING_TIPS: [&str; 5] = [
    "Keep a steady deficit and aim to lose 0.5-1% of body weight per week.",
    "Spread protein over 4-5 meals to protect lean mass while dieting.",
    "Keep lifting heavy; resistance training signals your body to hold on to muscle.",
    "Fill up on high-volume foods like vegetables, berries and lean soups.",
    "Sleep 7-9 hours a night; short sleep raises hunger and cravings.",
];

const BULKING_TIPS: [&str; 5] = [
    "Aim to gain 0.25-0.5% of body weight per week to limit fat gain.",
    "Follow a progressive overload program and log your lifts.",
    "Eat a protein-rich meal within a few hours after training.",
    "Use calorie-dense whole foods such as oats, rice, nuts and olive oil.",
    "Reassess every 2-3 weeks and adjust calories if the scale stalls.",
];

const MAINTENANCE_TIPS: [&str; 5] = [
    "Weigh yourself a few times a week and watch the weekly average.",
    "Keep protein high to support recovery and body composition.",
    "Mix strength training with 150 minutes of moderate cardio weekly.",
    "Build meals around whole foods and leave room for foods you enjoy.",
    "Stay hydrated: roughly 30-35 ml of water per kg of body weight daily.",
];

const CUTTING_SMOKER_TIPS: [&str; 6] = [
    "Your deficit is smaller because smoking already raises resting energy use.",
    "Extra protein helps offset the muscle-wasting effect of smoking.",
    "Nicotine suppresses appetite; avoid skipping meals and under-eating protein.",
    "Add vitamin C rich foods; smokers need about 35 mg more per day.",
    "Expect reduced lung capacity during cardio and build intensity gradually.",
    "If you quit during a cut, expect a small weight rebound and keep protein high.",
];

const BULKING_SMOKER_TIPS: [&str; 6] = [
    "Your surplus is smaller because smoking impairs nutrient partitioning.",
    "Higher protein supports muscle protein synthesis that smoking blunts.",
    "Smoking slows recovery; allow an extra rest day between hard sessions.",
    "Eat antioxidant-rich fruits and vegetables to counter oxidative stress.",
    "Avoid smoking around training sessions to keep oxygen delivery up.",
    "Consider a cessation program; recovery and strength gains improve quickly after quitting.",
];

const MAINTENANCE_SMOKER_TIPS: [&str; 6] = [
    "Protein is set slightly higher to protect lean mass.",
    "Monitor your resting heart rate; smoking keeps it elevated.",
    "Include omega-3 sources like oily fish for cardiovascular support.",
    "Keep caffeine moderate; combined with nicotine it raises heart rate further.",
    "Prioritize low-intensity cardio to build aerobic capacity safely.",
    "Talk to a healthcare provider about support for quitting smoking.",
];

/// Goal-dependent tips (five per goal)
#[must_use]
pub fn recommendations(goal: FitnessGoal) -> Vec<String> {
    let tips: &[&str] = match goal {
        FitnessGoal::Cutting => &CUTTING_TIPS,
        FitnessGoal::Bulking => &BULKING_TIPS,
        FitnessGoal::Maintenance => &MAINTENANCE_TIPS,
    };
    tips.iter().map(|&t| t.to_owned()).collect()
}

/// Smoker caveats for a goal (six per goal)
#[must_use]
pub fn smoker_recommendations(goal: FitnessGoal) -> Vec<String> {
    let tips: &[&str] = match goal {
        FitnessGoal::Cutting => &CUTTING_SMOKER_TIPS,
        FitnessGoal::Bulking => &BULKING_SMOKER_TIPS,
        FitnessGoal::Maintenance => &MAINTENANCE_SMOKER_TIPS,
    };
    tips.iter().map(|&t| t.to_owned()).collect()
}
