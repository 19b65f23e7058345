// ABOUTME: Fitness intelligence engine: metrics calculator, diet allocator, catalogs, assistant
// ABOUTME: Side-effect-free logic consumed by the HTTP server and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pulse Intelligence
//!
//! The calculator is a single-pass pipeline with no state across calls:
//!
//! ```text
//! MeasurementInput -> validate -> compute -> classify -> allocate_diet
//! ```
//!
//! ```text
//! use pulse_intelligence::{calculate, allocate_diet, RecipeCatalog};
//!
//! let metrics = calculate(&input)?;
//! let plan = allocate_diet(&metrics, RecipeCatalog::embedded()?);
//! ```

/// Required-field and range validation of raw measurement input
pub mod validator;

/// BMI, BMR, TDEE, calorie target and macro computation
pub mod calculator;

/// BMI bands and static recommendation texts
pub mod classifier;

/// Meal slot calorie split and recipe selection
pub mod diet_allocator;

/// Static recipe and workout catalogs loaded from JSON
pub mod catalog;

/// Weight trend and measurement summaries
pub mod progress;

/// Keyword-driven chat assistant
pub mod assistant;

pub use assistant::{Assistant, AssistantContext, Intent};
pub use calculator::{calculate, compute};
pub use catalog::{CatalogError, RecipeCatalog, RecipeFilter, WorkoutCatalog, WorkoutFilter};
pub use classifier::classify_bmi;
pub use diet_allocator::allocate_diet;
pub use progress::summarize_progress;
pub use validator::validate;
