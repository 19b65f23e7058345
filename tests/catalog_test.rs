// ABOUTME: Integration tests for the recipe and workout catalogs
// ABOUTME: Embedded data, filters, lookups, goal suggestions, and load-time validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pulse_core::errors::{AppError, ErrorCode};
use pulse_core::models::{DifficultyLevel, FitnessGoal, MealType, WorkoutCategory};
use pulse_intelligence::{
    CatalogError, RecipeCatalog, RecipeFilter, WorkoutCatalog, WorkoutFilter,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn recipe_ids(recipes: &[&pulse_core::models::Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.id.clone()).collect()
}

fn workout_ids(workouts: &[&pulse_core::models::Workout]) -> Vec<String> {
    workouts.iter().map(|w| w.id.clone()).collect()
}

// ============================================================================
// Recipes
// ============================================================================

#[test]
fn test_embedded_recipes_load() {
    let catalog = RecipeCatalog::embedded().unwrap();
    assert_eq!(catalog.len(), 20);
    assert!(!catalog.is_empty());

    for meal_type in [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ] {
        assert_eq!(catalog.by_meal_type(meal_type).count(), 5);
    }
}

#[test]
fn test_recipe_lookup_by_id() {
    let catalog = RecipeCatalog::embedded().unwrap();
    let recipe = catalog.get("r-019").unwrap();
    assert_eq!(recipe.name, "Protein Shake");
    assert_eq!(recipe.meal_type, MealType::Snack);
    assert!((recipe.macros.protein_g - 30.0).abs() < f64::EPSILON);
    assert!(catalog.get("r-999").is_none());
}

#[test]
fn test_recipe_filters_combine() {
    let catalog = RecipeCatalog::embedded().unwrap();

    let vegan = catalog.filter(&RecipeFilter {
        tag: Some("vegan".to_owned()),
        ..RecipeFilter::default()
    });
    assert_eq!(recipe_ids(&vegan), vec!["r-009", "r-015", "r-016", "r-020"]);

    let light = catalog.filter(&RecipeFilter {
        max_calories: Some(200.0),
        ..RecipeFilter::default()
    });
    assert_eq!(recipe_ids(&light), vec!["r-016", "r-017", "r-018", "r-019"]);

    let protein_lunch = catalog.filter(&RecipeFilter {
        meal_type: Some(MealType::Lunch),
        tag: Some("high_protein".to_owned()),
        min_protein_g: Some(40.0),
        ..RecipeFilter::default()
    });
    assert_eq!(recipe_ids(&protein_lunch), vec!["r-006", "r-008", "r-010"]);

    let nothing = catalog.filter(&RecipeFilter {
        meal_type: Some(MealType::Snack),
        min_protein_g: Some(100.0),
        ..RecipeFilter::default()
    });
    assert!(nothing.is_empty());
}

#[test]
fn test_empty_filter_returns_everything_in_order() {
    let catalog = RecipeCatalog::embedded().unwrap();
    let all = catalog.filter(&RecipeFilter::default());
    assert_eq!(all.len(), 20);
    assert_eq!(all[0].id, "r-001");
    assert_eq!(all[19].id, "r-020");
}

#[test]
fn test_duplicate_recipe_id_rejected() {
    let mut recipes = RecipeCatalog::embedded().unwrap().all().to_vec();
    let mut copy = recipes[0].clone();
    copy.name = "Another Oatmeal".to_owned();
    recipes.push(copy);

    let err = RecipeCatalog::new(recipes).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { ref id, .. } if id == "r-001"));
}

#[test]
fn test_invalid_recipe_records_rejected() {
    let base = RecipeCatalog::embedded().unwrap().all().to_vec();

    let mut unnamed = base.clone();
    unnamed[3].name = "  ".to_owned();
    assert!(matches!(
        RecipeCatalog::new(unnamed).unwrap_err(),
        CatalogError::InvalidRecord { .. }
    ));

    let mut negative = base;
    negative[5].macros.fat_g = -1.0;
    let err = RecipeCatalog::new(negative).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidRecord { ref id, .. } if id == "r-006"));
}

#[test]
fn test_malformed_recipe_json_rejected() {
    let err = RecipeCatalog::from_json("{\"recipes\": 12}").unwrap_err();
    assert!(matches!(err, CatalogError::Parse { catalog: "recipe", .. }));
}

#[test]
fn test_recipe_catalog_loads_from_file() {
    let recipes = RecipeCatalog::embedded().unwrap().all()[..2].to_vec();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&recipes).unwrap().as_bytes())
        .unwrap();

    let catalog = RecipeCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("r-002").is_some());
}

#[test]
fn test_missing_catalog_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WorkoutCatalog::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));

    let app_error: AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::StorageError);
}

// ============================================================================
// Workouts
// ============================================================================

#[test]
fn test_embedded_workouts_load() {
    let catalog = WorkoutCatalog::embedded().unwrap();
    assert_eq!(catalog.len(), 13);
    assert!(catalog.all().iter().all(|w| !w.exercises.is_empty()));

    let tabata = catalog.get("w-005").unwrap();
    assert_eq!(tabata.name, "Tabata Burner");
    assert_eq!(tabata.category, WorkoutCategory::Hiit);
    assert_eq!(tabata.duration_minutes, 25);
}

#[test]
fn test_workout_filters() {
    let catalog = WorkoutCatalog::embedded().unwrap();

    let hiit = catalog.filter(&WorkoutFilter {
        category: Some(WorkoutCategory::Hiit),
        ..WorkoutFilter::default()
    });
    assert_eq!(workout_ids(&hiit), vec!["w-005", "w-006", "w-007"]);

    let beginner = catalog.filter(&WorkoutFilter {
        difficulty: Some(DifficultyLevel::Beginner),
        ..WorkoutFilter::default()
    });
    assert_eq!(
        workout_ids(&beginner),
        vec!["w-001", "w-004", "w-007", "w-008", "w-010", "w-012"]
    );

    let short = catalog.filter(&WorkoutFilter {
        max_duration_minutes: Some(25),
        ..WorkoutFilter::default()
    });
    assert_eq!(
        workout_ids(&short),
        vec!["w-005", "w-007", "w-010", "w-011", "w-012"]
    );
}

#[test]
fn test_goal_suggestions_prefer_goal_categories() {
    let catalog = WorkoutCatalog::embedded().unwrap();

    let cutting = catalog.suggest_for_goal(FitnessGoal::Cutting, 3);
    assert_eq!(workout_ids(&cutting), vec!["w-005", "w-006", "w-007"]);

    let cutting_more = catalog.suggest_for_goal(FitnessGoal::Cutting, 5);
    assert_eq!(
        workout_ids(&cutting_more),
        vec!["w-005", "w-006", "w-007", "w-008", "w-009"]
    );

    let bulking = catalog.suggest_for_goal(FitnessGoal::Bulking, 3);
    assert_eq!(workout_ids(&bulking), vec!["w-001", "w-002", "w-003"]);

    let bulking_all = catalog.suggest_for_goal(FitnessGoal::Bulking, 50);
    assert_eq!(bulking_all.len(), 6);
    assert!(bulking_all
        .iter()
        .all(|w| matches!(w.category, WorkoutCategory::Strength | WorkoutCategory::Core)));

    let maintenance = catalog.suggest_for_goal(FitnessGoal::Maintenance, 50);
    assert_eq!(maintenance.len(), 8);

    assert!(catalog.suggest_for_goal(FitnessGoal::Cutting, 0).is_empty());
}

#[test]
fn test_workout_without_exercises_rejected() {
    let mut workouts = WorkoutCatalog::embedded().unwrap().all().to_vec();
    workouts[2].exercises.clear();
    let err = WorkoutCatalog::new(workouts).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidRecord { ref id, .. } if id == "w-003"));
}

#[test]
fn test_duplicate_workout_id_rejected() {
    let mut workouts = WorkoutCatalog::embedded().unwrap().all().to_vec();
    workouts[1].id = "w-001".to_owned();
    assert!(matches!(
        WorkoutCatalog::new(workouts).unwrap_err(),
        CatalogError::DuplicateId { .. }
    ));
}
