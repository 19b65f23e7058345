// ABOUTME: Integration tests for the diet allocator
// ABOUTME: Slot calorie split, fixed slot order and times, recipe selection, and supplements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{carb_clamp_measurements, sample_measurements};
use pulse_core::models::{FitnessGoal, MealSlotKind, MeasurementInput};
use pulse_intelligence::diet_allocator::{split_calories, supplements};
use pulse_intelligence::{allocate_diet, calculate, RecipeCatalog};

fn ids(slot: &pulse_core::models::MealSlot) -> Vec<&str> {
    slot.recipes.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_worked_example_slot_split() {
    let metrics = calculate(&sample_measurements()).unwrap();
    let catalog = RecipeCatalog::embedded().unwrap();
    let plan = allocate_diet(&metrics, &catalog);

    let calories: Vec<f64> = plan.meals.iter().map(|m| m.target_calories).collect();
    assert_eq!(calories, vec![558.0, 223.0, 670.0, 223.0, 559.0]);
    assert!((calories.iter().sum::<f64>() - 2233.0).abs() < f64::EPSILON);

    assert!((plan.total_calories - metrics.target_calories).abs() < f64::EPSILON);
    assert!((plan.protein_g - metrics.protein_g).abs() < f64::EPSILON);
    assert!((plan.carbs_g - metrics.carbs_g).abs() < f64::EPSILON);
    assert!((plan.fat_g - metrics.fat_g).abs() < f64::EPSILON);
    assert_eq!(plan.goal, FitnessGoal::Cutting);
}

#[test]
fn test_slots_have_fixed_order_times_and_shares() {
    let metrics = calculate(&sample_measurements()).unwrap();
    let plan = allocate_diet(&metrics, &RecipeCatalog::embedded().unwrap());

    let kinds: Vec<MealSlotKind> = plan.meals.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, MealSlotKind::ALL.to_vec());

    let times: Vec<&str> = plan.meals.iter().map(|m| m.time.as_str()).collect();
    assert_eq!(times, vec!["07:00", "10:00", "12:30", "16:00", "19:30"]);

    let names: Vec<&str> = plan.meals.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Breakfast", "Morning Snack", "Lunch", "Afternoon Snack", "Dinner"]
    );

    let percents: Vec<u8> = plan.meals.iter().map(|m| m.percent).collect();
    assert_eq!(percents, vec![25, 10, 30, 10, 25]);
    assert_eq!(percents.iter().map(|&p| u32::from(p)).sum::<u32>(), 100);
}

#[test]
fn test_recipes_taken_in_catalog_order() {
    let metrics = calculate(&sample_measurements()).unwrap();
    let plan = allocate_diet(&metrics, &RecipeCatalog::embedded().unwrap());

    let counts: Vec<usize> = plan.meals.iter().map(|m| m.recipes.len()).collect();
    assert_eq!(counts, vec![3, 2, 3, 2, 3]);

    assert_eq!(ids(&plan.meals[0]), vec!["r-001", "r-002", "r-003"]);
    assert_eq!(ids(&plan.meals[1]), vec!["r-016", "r-017"]);
    assert_eq!(ids(&plan.meals[2]), vec!["r-006", "r-007", "r-008"]);
    assert_eq!(ids(&plan.meals[3]), vec!["r-016", "r-017"]);
    assert_eq!(ids(&plan.meals[4]), vec!["r-011", "r-012", "r-013"]);
}

#[test]
fn test_split_always_sums_to_total() {
    for total in [1.0, 999.0, 1234.0, 1844.0, 2233.0, 2623.0, 3001.0, 4567.0] {
        let split = split_calories(total);
        assert_eq!(split.len(), 5);
        let sum: f64 = split.iter().map(|(_, kcal)| kcal).sum();
        assert!((sum - total).abs() < f64::EPSILON, "total {total}");
        assert!(split.iter().all(|(_, kcal)| kcal.fract() == 0.0));
    }
}

#[test]
fn test_clamped_metrics_still_allocate() {
    let metrics = calculate(&carb_clamp_measurements()).unwrap();
    let plan = allocate_diet(&metrics, &RecipeCatalog::embedded().unwrap());

    assert!(plan.carbs_g.abs() < f64::EPSILON);
    let sum: f64 = plan.meals.iter().map(|m| m.target_calories).sum();
    assert!((sum - 1844.0).abs() < f64::EPSILON);
}

#[test]
fn test_short_catalog_fills_what_it_can() {
    let mut recipes = RecipeCatalog::embedded().unwrap().all().to_vec();
    recipes.retain(|r| r.id != "r-017" && r.id != "r-018" && r.id != "r-019" && r.id != "r-020");
    let catalog = RecipeCatalog::new(recipes).unwrap();

    let metrics = calculate(&sample_measurements()).unwrap();
    let plan = allocate_diet(&metrics, &catalog);

    assert_eq!(ids(&plan.meals[1]), vec!["r-016"]);
    assert_eq!(ids(&plan.meals[3]), vec!["r-016"]);
}

#[test]
fn test_supplements_follow_goal() {
    assert!(supplements(FitnessGoal::Cutting).contains(&"Green Tea Extract".to_owned()));
    assert!(supplements(FitnessGoal::Bulking).contains(&"Creatine Monohydrate".to_owned()));
    assert_eq!(
        supplements(FitnessGoal::Maintenance),
        vec!["Multivitamin", "Omega-3 Fish Oil", "Vitamin D3"]
    );

    let bulking = MeasurementInput {
        goal: Some("bulking".to_owned()),
        ..sample_measurements()
    };
    let metrics = calculate(&bulking).unwrap();
    let plan = allocate_diet(&metrics, &RecipeCatalog::embedded().unwrap());
    assert_eq!(plan.supplements, supplements(FitnessGoal::Bulking));
}
