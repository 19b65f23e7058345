// ABOUTME: Workout catalog indexed by id with category, difficulty, and duration filters
// ABOUTME: Loads the workout JSON data file and suggests sessions for a dietary goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{check_ids, read_file, CatalogError};
use pulse_core::models::{DifficultyLevel, FitnessGoal, Workout, WorkoutCategory};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

const EMBEDDED_WORKOUTS: &str = include_str!("../../data/workouts.json");

/// Filter options for listing workouts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutFilter {
    /// Only this category
    #[serde(default)]
    pub category: Option<WorkoutCategory>,
    /// Only this difficulty
    #[serde(default)]
    pub difficulty: Option<DifficultyLevel>,
    /// Session length at most (minutes)
    #[serde(default)]
    pub max_duration_minutes: Option<u32>,
}

impl WorkoutFilter {
    fn matches(&self, workout: &Workout) -> bool {
        self.category.map_or(true, |c| workout.category == c)
            && self.difficulty.map_or(true, |d| workout.difficulty == d)
            && self
                .max_duration_minutes
                .map_or(true, |max| workout.duration_minutes <= max)
    }
}

/// In-memory workout table
#[derive(Debug, Clone)]
pub struct WorkoutCatalog {
    workouts: Vec<Workout>,
    by_id: HashMap<String, usize>,
}

impl WorkoutCatalog {
    /// Build a catalog from records, keeping their order
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids, empty names, or workouts without exercises
    pub fn new(workouts: Vec<Workout>) -> Result<Self, CatalogError> {
        check_ids(
            "workout",
            workouts.iter().map(|w| (w.id.as_str(), w.name.as_str())),
        )?;
        if let Some(bad) = workouts
            .iter()
            .find(|w| w.exercises.is_empty() || w.duration_minutes == 0)
        {
            return Err(CatalogError::InvalidRecord {
                catalog: "workout",
                id: bad.id.clone(),
                reason: "workouts need a duration and at least one exercise".to_owned(),
            });
        }

        let by_id = workouts
            .iter()
            .enumerate()
            .map(|(index, w)| (w.id.clone(), index))
            .collect();

        Ok(Self { workouts, by_id })
    }

    /// Parse a JSON array of workouts
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the records are invalid
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let workouts: Vec<Workout> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                catalog: "workout",
                source,
            })?;
        Self::new(workouts)
    }

    /// Catalog shipped with the binary
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data is invalid
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_WORKOUTS)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let catalog = Self::from_json(&read_file(path)?)?;
        info!(
            catalog.path = %path.display(),
            catalog.size = catalog.len(),
            "Loaded workout catalog"
        );
        Ok(catalog)
    }

    /// Every workout in catalog order
    #[must_use]
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    /// Number of workouts
    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Workout by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Workout> {
        self.by_id.get(id).map(|&index| &self.workouts[index])
    }

    /// Workouts matching every set filter field, catalog order
    #[must_use]
    pub fn filter(&self, filter: &WorkoutFilter) -> Vec<&Workout> {
        self.workouts.iter().filter(|w| filter.matches(w)).collect()
    }

    /// Workouts suited to a goal, preferred categories first, catalog order within a category
    ///
    /// - cutting: HIIT, cardio, strength
    /// - bulking: strength, core
    /// - maintenance: strength, cardio, flexibility
    #[must_use]
    pub fn suggest_for_goal(&self, goal: FitnessGoal, limit: usize) -> Vec<&Workout> {
        let preferred: &[WorkoutCategory] = match goal {
            FitnessGoal::Cutting => &[
                WorkoutCategory::Hiit,
                WorkoutCategory::Cardio,
                WorkoutCategory::Strength,
            ],
            FitnessGoal::Bulking => &[WorkoutCategory::Strength, WorkoutCategory::Core],
            FitnessGoal::Maintenance => &[
                WorkoutCategory::Strength,
                WorkoutCategory::Cardio,
                WorkoutCategory::Flexibility,
            ],
        };

        preferred
            .iter()
            .flat_map(|&category| self.workouts.iter().filter(move |w| w.category == category))
            .take(limit)
            .collect()
    }
}
