// ABOUTME: Static reference catalogs for recipes and workouts
// ABOUTME: JSON data files loaded once at startup into indexed in-memory tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalogs
//!
//! Recipes and workouts are fixed reference data shipped as JSON under
//! `data/`. The files are embedded in the binary and can be replaced at
//! startup with a path from configuration. Loading validates ids and builds
//! lookup indexes; catalogs are read-only afterwards.

mod recipes;
mod workouts;

pub use recipes::{RecipeCatalog, RecipeFilter};
pub use workouts::{WorkoutCatalog, WorkoutFilter};

use pulse_core::errors::AppError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The data was not valid catalog JSON
    #[error("malformed {catalog} catalog: {source}")]
    Parse {
        /// Catalog kind (`recipe`, `workout`)
        catalog: &'static str,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
    /// Two records share an id
    #[error("duplicate {catalog} id '{id}'")]
    DuplicateId {
        /// Catalog kind
        catalog: &'static str,
        /// Repeated id
        id: String,
    },
    /// A record failed a content check
    #[error("invalid {catalog} record '{id}': {reason}")]
    InvalidRecord {
        /// Catalog kind
        catalog: &'static str,
        /// Record id
        id: String,
        /// What is wrong
        reason: String,
    },
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Reject empty ids/names and duplicate ids
fn check_ids<'a>(
    catalog: &'static str,
    records: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for (id, name) in records {
        if id.trim().is_empty() || name.trim().is_empty() {
            return Err(CatalogError::InvalidRecord {
                catalog,
                id: id.to_owned(),
                reason: "id and name must not be empty".to_owned(),
            });
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                catalog,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

fn read_file(path: &std::path::Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
