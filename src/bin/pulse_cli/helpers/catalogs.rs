// ABOUTME: Catalog loading for pulse-cli
// ABOUTME: Uses the embedded catalogs unless a path override is set in the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_intelligence::{RecipeCatalog, WorkoutCatalog};
use pulse_server::{constants::env_vars, errors::AppResult};
use std::env;
use std::path::PathBuf;
use tracing::debug;

fn override_path(var: &str) -> Option<PathBuf> {
    env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Recipe catalog from `RECIPE_CATALOG_PATH` or the embedded data
pub fn load_recipes() -> AppResult<RecipeCatalog> {
    let catalog = match override_path(env_vars::RECIPE_CATALOG_PATH) {
        Some(path) => {
            debug!("Loading recipes from {}", path.display());
            RecipeCatalog::load(&path)?
        }
        None => RecipeCatalog::embedded()?,
    };
    Ok(catalog)
}

/// Workout catalog from `WORKOUT_CATALOG_PATH` or the embedded data
pub fn load_workouts() -> AppResult<WorkoutCatalog> {
    let catalog = match override_path(env_vars::WORKOUT_CATALOG_PATH) {
        Some(path) => {
            debug!("Loading workouts from {}", path.display());
            WorkoutCatalog::load(&path)?
        }
        None => WorkoutCatalog::embedded()?,
    };
    Ok(catalog)
}
