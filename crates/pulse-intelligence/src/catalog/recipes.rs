// ABOUTME: Recipe catalog indexed by id and meal type
// ABOUTME: Loads the recipe JSON data file and answers filter queries in catalog order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{check_ids, read_file, CatalogError};
use pulse_core::models::{MealType, Recipe};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

const EMBEDDED_RECIPES: &str = include_str!("../../data/recipes.json");

/// Filter options for listing recipes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeFilter {
    /// Only this meal type
    #[serde(default)]
    pub meal_type: Option<MealType>,
    /// Only recipes carrying this tag
    #[serde(default)]
    pub tag: Option<String>,
    /// Calories per serving at most
    #[serde(default)]
    pub max_calories: Option<f64>,
    /// Protein per serving at least (grams)
    #[serde(default)]
    pub min_protein_g: Option<f64>,
}

impl RecipeFilter {
    fn matches(&self, recipe: &Recipe) -> bool {
        self.meal_type.map_or(true, |t| recipe.meal_type == t)
            && self.tag.as_deref().map_or(true, |t| recipe.has_tag(t))
            && self
                .max_calories
                .map_or(true, |max| recipe.macros.calories <= max)
            && self
                .min_protein_g
                .map_or(true, |min| recipe.macros.protein_g >= min)
    }
}

/// In-memory recipe table
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    by_id: HashMap<String, usize>,
    by_meal_type: HashMap<MealType, Vec<usize>>,
}

impl RecipeCatalog {
    /// Build a catalog from records, keeping their order
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids, empty names, or negative macros
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        check_ids(
            "recipe",
            recipes.iter().map(|r| (r.id.as_str(), r.name.as_str())),
        )?;
        if let Some(bad) = recipes.iter().find(|r| {
            let m = r.macros;
            [m.calories, m.protein_g, m.carbs_g, m.fat_g]
                .iter()
                .any(|v| !v.is_finite() || *v < 0.0)
        }) {
            return Err(CatalogError::InvalidRecord {
                catalog: "recipe",
                id: bad.id.clone(),
                reason: "macros must be non-negative numbers".to_owned(),
            });
        }

        let by_id = recipes
            .iter()
            .enumerate()
            .map(|(index, r)| (r.id.clone(), index))
            .collect();
        let mut by_meal_type: HashMap<MealType, Vec<usize>> = HashMap::new();
        for (index, recipe) in recipes.iter().enumerate() {
            by_meal_type.entry(recipe.meal_type).or_default().push(index);
        }

        Ok(Self {
            recipes,
            by_id,
            by_meal_type,
        })
    }

    /// Parse a JSON array of recipes
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the records are invalid
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                catalog: "recipe",
                source,
            })?;
        Self::new(recipes)
    }

    /// Catalog shipped with the binary
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data is invalid
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_RECIPES)
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
            "Loaded recipe catalog"
        );
        Ok(catalog)
    }

    /// Every recipe in catalog order
    #[must_use]
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipe by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.by_id.get(id).map(|&index| &self.recipes[index])
    }

    /// Recipes tagged for a meal type, catalog order
    pub fn by_meal_type(&self, meal_type: MealType) -> impl Iterator<Item = &Recipe> + '_ {
        self.by_meal_type
            .get(&meal_type)
            .into_iter()
            .flatten()
            .map(|&index| &self.recipes[index])
    }

    /// Recipes matching every set filter field, catalog order
    #[must_use]
    pub fn filter(&self, filter: &RecipeFilter) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| filter.matches(r)).collect()
    }
}
