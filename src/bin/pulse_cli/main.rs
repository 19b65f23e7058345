// ABOUTME: Pulse CLI - local command-line client for the fitness metrics engine
// ABOUTME: Calculates metrics and diet plans, browses catalogs, and chats with the assistant offline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Calculate metrics and a diet plan
//! pulse-cli calculate --weight 75 --height 175 --age 30 --sex male --activity moderate --goal cutting
//!
//! # Browse high-protein breakfasts
//! pulse-cli recipes --meal-type breakfast --tag high_protein
//!
//! # Suggest workouts for a goal
//! pulse-cli workouts --goal bulking
//!
//! # Ask the assistant, using the last calculation as context
//! pulse-cli chat how much protein should I eat
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use pulse_server::{errors::AppResult, local_state::LocalStateStore, logging::LoggingConfig};
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pulse-cli",
    about = "Pulse fitness calculator CLI",
    long_about = "Offline command-line client for body metrics, diet plans, catalogs, and the fitness assistant."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// State file override (defaults to the user data directory)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate BMI, BMR, TDEE, macros, and a diet plan
    Calculate {
        /// Body weight (kg)
        #[arg(long)]
        weight: Option<f64>,

        /// Height (cm)
        #[arg(long)]
        height: Option<f64>,

        /// Age (years)
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i64>,

        /// `male` or `female`
        #[arg(long)]
        sex: Option<String>,

        /// `sedentary`, `light`, `moderate`, `active`, or `very_active`
        #[arg(long)]
        activity: Option<String>,

        /// `cutting`, `bulking`, or `maintenance`
        #[arg(long)]
        goal: Option<String>,

        /// Apply smoker adjustments
        #[arg(long)]
        smoker: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Do not remember the result for the assistant
        #[arg(long)]
        no_save: bool,
    },

    /// List recipes from the catalog
    Recipes {
        /// `breakfast`, `lunch`, `dinner`, or `snack`
        #[arg(long)]
        meal_type: Option<String>,

        /// Only recipes with this tag (e.g. `high_protein`)
        #[arg(long)]
        tag: Option<String>,

        /// Calories per serving at most
        #[arg(long)]
        max_calories: Option<f64>,

        /// Protein per serving at least (grams)
        #[arg(long)]
        min_protein: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List or suggest workouts from the catalog
    Workouts {
        /// `strength`, `cardio`, `hiit`, `flexibility`, or `core`
        #[arg(long)]
        category: Option<String>,

        /// `beginner`, `intermediate`, or `advanced`
        #[arg(long)]
        difficulty: Option<String>,

        /// Session length at most (minutes)
        #[arg(long)]
        max_duration: Option<u32>,

        /// Suggest sessions for this goal instead of filtering
        #[arg(long)]
        goal: Option<String>,

        /// Number of suggestions when `--goal` is set
        #[arg(long, default_value = "3")]
        limit: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Talk to the fitness assistant
    Chat {
        /// Message text
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,

        /// Forget the stored conversation first
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Logging disabled: {e}");
    }

    let state_path = match cli.state_file {
        Some(path) => path,
        None => LocalStateStore::default_path()?,
    };
    debug!("Using state file {}", state_path.display());
    let store = LocalStateStore::new(state_path);

    match cli.command {
        Command::Calculate {
            weight,
            height,
            age,
            sex,
            activity,
            goal,
            smoker,
            json,
            no_save,
        } => {
            let input = pulse_core::models::MeasurementInput {
                weight_kg: weight,
                height_cm: height,
                age_years: age,
                sex,
                activity_level: activity,
                goal,
                is_smoker: Some(smoker),
            };
            commands::calculate::run(&store, &input, json, !no_save)?;
        }
        Command::Recipes {
            meal_type,
            tag,
            max_calories,
            min_protein,
            json,
        } => {
            let filter = commands::catalog::recipe_filter(meal_type, tag, max_calories, min_protein)?;
            commands::catalog::recipes(&filter, json)?;
        }
        Command::Workouts {
            category,
            difficulty,
            max_duration,
            goal,
            limit,
            json,
        } => {
            let query = commands::catalog::WorkoutQuery::parse(
                category,
                difficulty,
                max_duration,
                goal,
                limit,
            )?;
            commands::catalog::workouts(&query, json)?;
        }
        Command::Chat { message, reset } => {
            commands::chat::run(&store, &message.join(" "), reset)?;
        }
    }

    Ok(())
}
