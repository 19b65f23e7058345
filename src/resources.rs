// ABOUTME: Centralized resource container for dependency injection in the Pulse server
// ABOUTME: Holds the database, configuration, catalogs, and assistant shared by all routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup and shared behind an `Arc`. Catalogs are immutable
//! after loading, so handlers read them without locking.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::AppResult;
use pulse_intelligence::{Assistant, RecipeCatalog, WorkoutCatalog};
use std::sync::Arc;
use tracing::info;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Persistence layer
    pub database: Arc<Database>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Recipe catalog
    pub recipes: Arc<RecipeCatalog>,
    /// Workout catalog
    pub workouts: Arc<WorkoutCatalog>,
    /// Rule-based chat assistant over the same catalogs
    pub assistant: Arc<Assistant>,
}

impl ServerResources {
    /// Assemble resources from already-loaded parts
    #[must_use]
    pub fn new(
        database: Database,
        config: Arc<ServerConfig>,
        recipes: RecipeCatalog,
        workouts: WorkoutCatalog,
    ) -> Self {
        let recipes = Arc::new(recipes);
        let workouts = Arc::new(workouts);
        let assistant = Arc::new(Assistant::new(Arc::clone(&recipes), Arc::clone(&workouts)));

        Self {
            database: Arc::new(database),
            config,
            recipes,
            workouts,
            assistant,
        }
    }

    /// Connect the database and load catalogs named by `config`
    ///
    /// Catalog paths that are not configured fall back to the embedded data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or a catalog fails to load
    pub async fn initialize(config: ServerConfig) -> AppResult<Self> {
        let database = Database::new(&config.database_url).await?;

        let recipes = match &config.catalogs.recipes_path {
            Some(path) => RecipeCatalog::load(path)?,
            None => RecipeCatalog::embedded()?,
        };
        let workouts = match &config.catalogs.workouts_path {
            Some(path) => WorkoutCatalog::load(path)?,
            None => WorkoutCatalog::embedded()?,
        };

        info!(
            catalog.recipes = recipes.len(),
            catalog.workouts = workouts.len(),
            "Catalogs loaded"
        );

        Ok(Self::new(database, Arc::new(config), recipes, workouts))
    }
}
