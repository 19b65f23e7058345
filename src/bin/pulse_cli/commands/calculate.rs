// ABOUTME: Calculator command for pulse-cli
// ABOUTME: Validates measurements, prints metrics and a diet plan, and remembers the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::{catalogs, display};
use pulse_core::models::MeasurementInput;
use pulse_intelligence::{allocate_diet, calculate};
use pulse_server::{errors::AppResult, local_state::LocalStateStore};
use serde_json::json;
use tracing::info;

/// Run the calculator and print the results
pub fn run(
    store: &LocalStateStore,
    input: &MeasurementInput,
    as_json: bool,
    remember: bool,
) -> AppResult<()> {
    let metrics = calculate(input)?;
    let recipes = catalogs::load_recipes()?;
    let plan = allocate_diet(&metrics, &recipes);

    info!(
        calculator.goal = %metrics.goal,
        calculator.target_calories = metrics.target_calories,
        "Metrics calculated"
    );

    if as_json {
        display::print_json(&json!({ "metrics": metrics, "diet_plan": plan }))?;
    } else {
        display::display_metrics(&metrics);
        display::display_diet_plan(&plan);
    }

    if remember {
        let mut state = store.load()?;
        state.last_metrics = Some(metrics);
        store.save(&state)?;
    }

    Ok(())
}
