// ABOUTME: Catalog commands for pulse-cli
// ABOUTME: Parses filter flags and lists recipes and workouts from the catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::{catalogs, display};
use pulse_core::models::{DifficultyLevel, FitnessGoal, MealType, WorkoutCategory};
use pulse_intelligence::{RecipeFilter, WorkoutFilter};
use pulse_server::errors::{AppError, AppResult};

/// Parsed `workouts` arguments
pub struct WorkoutQuery {
    filter: WorkoutFilter,
    goal: Option<FitnessGoal>,
    limit: usize,
}

impl WorkoutQuery {
    /// Parse free-text flags into typed filters
    pub fn parse(
        category: Option<String>,
        difficulty: Option<String>,
        max_duration_minutes: Option<u32>,
        goal: Option<String>,
        limit: usize,
    ) -> AppResult<Self> {
        Ok(Self {
            filter: WorkoutFilter {
                category: parse_flag("category", category, WorkoutCategory::parse)?,
                difficulty: parse_flag("difficulty", difficulty, DifficultyLevel::parse)?,
                max_duration_minutes,
            },
            goal: parse_flag("goal", goal, FitnessGoal::parse)?,
            limit,
        })
    }
}

/// Build a recipe filter from flags
pub fn recipe_filter(
    meal_type: Option<String>,
    tag: Option<String>,
    max_calories: Option<f64>,
    min_protein_g: Option<f64>,
) -> AppResult<RecipeFilter> {
    Ok(RecipeFilter {
        meal_type: parse_flag("meal-type", meal_type, MealType::parse)?,
        tag,
        max_calories,
        min_protein_g,
    })
}

/// List recipes matching `filter`
pub fn recipes(filter: &RecipeFilter, as_json: bool) -> AppResult<()> {
    let catalog = catalogs::load_recipes()?;
    let matches = catalog.filter(filter);
    if as_json {
        display::print_json(&matches)
    } else {
        display::display_recipes(&matches);
        Ok(())
    }
}

/// List workouts matching `query`, or suggestions for its goal
pub fn workouts(query: &WorkoutQuery, as_json: bool) -> AppResult<()> {
    let catalog = catalogs::load_workouts()?;
    let matches = match query.goal {
        Some(goal) => catalog.suggest_for_goal(goal, query.limit),
        None => catalog.filter(&query.filter),
    };
    if as_json {
        display::print_json(&matches)
    } else {
        display::display_workouts(&matches);
        Ok(())
    }
}

fn parse_flag<T>(
    flag: &str,
    value: Option<String>,
    parse: impl Fn(&str) -> Option<T>,
) -> AppResult<Option<T>> {
    value
        .map(|raw| {
            parse(&raw).ok_or_else(|| {
                AppError::invalid_input(format!("Unknown value '{raw}' for --{flag}"))
            })
        })
        .transpose()
}
