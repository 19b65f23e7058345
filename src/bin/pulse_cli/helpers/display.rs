// ABOUTME: Output formatting helpers for pulse-cli
// ABOUTME: Text rendering of metrics, diet plans, recipes, workouts, and assistant replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::models::{DietPlan, MetricResult, MetricWarning, Recipe, Workout};
use pulse_server::errors::AppResult;
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display calculator results
pub fn display_metrics(metrics: &MetricResult) {
    println!("\nYour Metrics");
    println!("{}", "=".repeat(50));
    println!("   BMI: {:.1} ({})", metrics.bmi, metrics.bmi_category);
    println!("   BMR: {:.0} kcal/day", metrics.bmr);
    println!("   TDEE: {:.0} kcal/day", metrics.tdee);
    println!(
        "   Target: {:.0} kcal/day ({})",
        metrics.target_calories, metrics.goal
    );
    println!(
        "   Macros: {:.0} g protein, {:.0} g carbs, {:.0} g fat",
        metrics.protein_g, metrics.carbs_g, metrics.fat_g
    );
    println!("   Ideal weight: {:.1} kg", metrics.ideal_weight_kg);

    for warning in &metrics.warnings {
        match warning {
            MetricWarning::CarbsClamped { unclamped_g } => println!(
                "   Note: protein and fat exceed the calorie target; carbs set to 0 (was {unclamped_g:.0} g)"
            ),
        }
    }

    if !metrics.recommendations.is_empty() {
        println!("\nRecommendations:");
        for tip in &metrics.recommendations {
            println!("• {tip}");
        }
    }
    if !metrics.smoker_recommendations.is_empty() {
        println!("\nFor smokers:");
        for tip in &metrics.smoker_recommendations {
            println!("• {tip}");
        }
    }
}

/// Display a diet plan slot by slot
pub fn display_diet_plan(plan: &DietPlan) {
    println!("\nDiet Plan ({:.0} kcal)", plan.total_calories);
    println!("{}", "=".repeat(50));
    for slot in &plan.meals {
        println!(
            "{} {} - {:.0} kcal ({}%)",
            slot.time, slot.name, slot.target_calories, slot.percent
        );
        for recipe in &slot.recipes {
            println!(
                "     - {} ({:.0} kcal, {:.0} g protein)",
                recipe.name, recipe.macros.calories, recipe.macros.protein_g
            );
        }
    }

    if !plan.supplements.is_empty() {
        println!("\nSupplements:");
        for supplement in &plan.supplements {
            println!("• {supplement}");
        }
    }
}

/// Display a list of recipes
pub fn display_recipes(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("No recipes match these filters.");
        return;
    }
    for recipe in recipes {
        println!(
            "{:<6} {:<38} {:<9} {:>4.0} kcal  P {:>3.0}  C {:>3.0}  F {:>3.0}  {} min",
            recipe.id,
            recipe.name,
            recipe.meal_type.as_str(),
            recipe.macros.calories,
            recipe.macros.protein_g,
            recipe.macros.carbs_g,
            recipe.macros.fat_g,
            recipe.prep_time_minutes
        );
    }
    println!("\n{} recipe(s)", recipes.len());
}

/// Display a list of workouts
pub fn display_workouts(workouts: &[&Workout]) {
    if workouts.is_empty() {
        println!("No workouts match these filters.");
        return;
    }
    for workout in workouts {
        println!(
            "{:<6} {:<34} {:<11} {:<12} {:>3} min  ~{} kcal",
            workout.id,
            workout.name,
            workout.category.as_str(),
            workout.difficulty.as_str(),
            workout.duration_minutes,
            workout.estimated_calories
        );
    }
    println!("\n{} workout(s)", workouts.len());
}

/// Display an assistant reply
pub fn display_reply(reply: &str) {
    println!("\nPulse: {reply}\n");
}
