// ABOUTME: Rule-based fitness chat assistant answering from the user's own metrics and the catalogs
// ABOUTME: Keyword intent detection in fixed priority with deterministic reply templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Assistant
//!
//! Replies are built from the latest user message only. Earlier turns are
//! used for nothing but picking a motivation line, so the same history and
//! context always give the same reply.

use crate::catalog::{RecipeCatalog, RecipeFilter, WorkoutCatalog};
use pulse_core::models::{ChatMessage, FitnessGoal, MealType, MessageRole, MetricResult};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::debug;

/// Recipes or workouts quoted in one reply
const SUGGESTION_COUNT: usize = 3;

/// Messages this short that open with a greeting count as greetings
const GREETING_MAX_WORDS: usize = 4;

/// What the user is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Hello / hi
    Greeting,
    /// Daily calories, TDEE, BMR
    Calories,
    /// BMI and healthy weight
    Bmi,
    /// Protein and macro targets
    Protein,
    /// Recipe suggestions
    MealIdeas,
    /// Workout suggestions
    WorkoutIdeas,
    /// Losing weight or fat
    WeightLoss,
    /// Building muscle
    MuscleGain,
    /// Water intake
    Hydration,
    /// Sleep and recovery
    Recovery,
    /// Smoking and quitting
    Smoking,
    /// Motivation and plateaus
    Motivation,
    /// Nothing matched
    Help,
}

const GREETING_WORDS: &[&str] = &["hi", "hello", "hey", "hiya", "howdy", "yo"];

/// Keyword table in priority order, greeting handled separately
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Calories,
        &[
            "calorie",
            "calories",
            "kcal",
            "tdee",
            "bmr",
            "maintenance",
            "how much should i eat",
        ],
    ),
    (
        Intent::Bmi,
        &["bmi", "body mass", "ideal weight", "healthy weight"],
    ),
    (
        Intent::Protein,
        &["protein", "macro", "macros", "carb", "carbs", "carbohydrates"],
    ),
    (
        Intent::MealIdeas,
        &[
            "recipe",
            "recipes",
            "meal",
            "meals",
            "eat",
            "food",
            "breakfast",
            "lunch",
            "dinner",
            "snack",
            "snacks",
        ],
    ),
    (
        Intent::WorkoutIdeas,
        &[
            "workout",
            "workouts",
            "exercise",
            "exercises",
            "training",
            "train",
            "routine",
            "gym",
        ],
    ),
    (
        Intent::WeightLoss,
        &[
            "lose",
            "losing",
            "weight loss",
            "fat loss",
            "cut",
            "cutting",
            "slim",
        ],
    ),
    (
        Intent::MuscleGain,
        &["muscle", "bulk", "bulking", "gain", "mass", "stronger"],
    ),
    (
        Intent::Hydration,
        &["water", "hydration", "hydrate", "hydrated", "drink"],
    ),
    (
        Intent::Recovery,
        &["sleep", "rest", "recovery", "recover", "sore", "tired"],
    ),
    (
        Intent::Smoking,
        &[
            "smoke",
            "smoking",
            "smoker",
            "cigarette",
            "cigarettes",
            "nicotine",
            "vape",
        ],
    ),
    (
        Intent::Motivation,
        &[
            "motivation",
            "motivated",
            "unmotivated",
            "discouraged",
            "give up",
            "plateau",
            "stuck",
        ],
    ),
];

const MOTIVATION_LINES: [&str; 4] = [
    "Progress is rarely linear. Judge your week by the trend, not by a single weigh-in.",
    "Small habits compound: hit your protein, train, sleep, repeat.",
    "You do not need perfect days, just more good days than bad ones.",
    "Look back at where you started. Consistency is already paying off.",
];

/// Lowercased message split into words
struct NormalizedMessage {
    text: String,
    words: HashSet<String>,
    word_count: usize,
    first_word: Option<String>,
}

impl NormalizedMessage {
    fn new(message: &str) -> Self {
        let cleaned: String = message
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();
        Self {
            text: tokens.join(" "),
            words: tokens.iter().map(|&t| t.to_owned()).collect(),
            word_count: tokens.len(),
            first_word: tokens.first().map(|&t| t.to_owned()),
        }
    }

    fn mentions(&self, keyword: &str) -> bool {
        if keyword.contains(' ') {
            format!(" {} ", self.text).contains(&format!(" {keyword} "))
        } else {
            self.words.contains(keyword)
        }
    }
}

impl Intent {
    /// Detect the intent of one message
    #[must_use]
    pub fn detect(message: &str) -> Self {
        let normalized = NormalizedMessage::new(message);

        let is_greeting = normalized
            .first_word
            .as_deref()
            .is_some_and(|w| GREETING_WORDS.contains(&w))
            && normalized.word_count <= GREETING_MAX_WORDS;
        if is_greeting {
            return Self::Greeting;
        }

        INTENT_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| normalized.mentions(k)))
            .map_or(Self::Help, |(intent, _)| *intent)
    }

    /// Stable name for logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Calories => "calories",
            Self::Bmi => "bmi",
            Self::Protein => "protein",
            Self::MealIdeas => "meal_ideas",
            Self::WorkoutIdeas => "workout_ideas",
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Hydration => "hydration",
            Self::Recovery => "recovery",
            Self::Smoking => "smoking",
            Self::Motivation => "motivation",
            Self::Help => "help",
        }
    }
}

/// Per-user facts the assistant may quote
#[derive(Debug, Clone, Default)]
pub struct AssistantContext {
    /// Latest saved calculator result
    pub metrics: Option<MetricResult>,
    /// Name to greet the user with
    pub display_name: Option<String>,
}

/// Keyword-driven assistant over the shared catalogs
#[derive(Debug, Clone)]
pub struct Assistant {
    recipes: Arc<RecipeCatalog>,
    workouts: Arc<WorkoutCatalog>,
}

impl Assistant {
    /// Create an assistant reading from the given catalogs
    #[must_use]
    pub const fn new(recipes: Arc<RecipeCatalog>, workouts: Arc<WorkoutCatalog>) -> Self {
        Self { recipes, workouts }
    }

    /// Reply to the most recent user message in `history`
    #[must_use]
    pub fn respond(&self, history: &[ChatMessage], context: &AssistantContext) -> String {
        let Some(message) = history.iter().rev().find(|m| m.role == MessageRole::User) else {
            return greeting_reply(context);
        };

        let intent = Intent::detect(&message.content);
        debug!(assistant.intent = intent.as_str(), "Detected chat intent");

        let metrics = context.metrics.as_ref();
        match intent {
            Intent::Greeting => greeting_reply(context),
            Intent::Calories => calories_reply(metrics),
            Intent::Bmi => bmi_reply(metrics),
            Intent::Protein => protein_reply(metrics),
            Intent::MealIdeas => self.meal_reply(&message.content, metrics),
            Intent::WorkoutIdeas => self.workout_reply(metrics),
            Intent::WeightLoss => weight_loss_reply(metrics),
            Intent::MuscleGain => muscle_gain_reply(metrics),
            Intent::Hydration => HYDRATION_REPLY.to_owned(),
            Intent::Recovery => RECOVERY_REPLY.to_owned(),
            Intent::Smoking => smoking_reply(metrics),
            Intent::Motivation => motivation_reply(history),
            Intent::Help => HELP_REPLY.to_owned(),
        }
    }

    fn meal_reply(&self, message: &str, metrics: Option<&MetricResult>) -> String {
        let normalized = NormalizedMessage::new(message);
        let meal_type = [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ]
        .into_iter()
        .find(|t| normalized.mentions(t.as_str()) || normalized.mentions(&format!("{}s", t.as_str())));

        let filter = RecipeFilter {
            meal_type,
            tag: match metrics.map(|m| m.goal) {
                Some(FitnessGoal::Cutting | FitnessGoal::Bulking) => Some("high_protein".to_owned()),
                Some(FitnessGoal::Maintenance) | None => None,
            },
            ..RecipeFilter::default()
        };
        let recipes: Vec<_> = self
            .recipes
            .filter(&filter)
            .into_iter()
            .take(SUGGESTION_COUNT)
            .collect();

        if recipes.is_empty() {
            return "I couldn't find a matching recipe right now. Try asking for breakfast, lunch, dinner or snack ideas.".to_owned();
        }

        let mut reply = String::from("Here are some ideas:");
        for recipe in recipes {
            let _ = write!(
                reply,
                "\n- {} ({:.0} kcal, {:.0} g protein)",
                recipe.name, recipe.macros.calories, recipe.macros.protein_g
            );
        }
        if let Some(m) = metrics {
            let _ = write!(
                reply,
                "\nYour daily target is {:.0} kcal, so plan portions around that.",
                m.target_calories
            );
        }
        reply
    }

    fn workout_reply(&self, metrics: Option<&MetricResult>) -> String {
        let goal = metrics.map_or(FitnessGoal::Maintenance, |m| m.goal);
        let workouts = self.workouts.suggest_for_goal(goal, SUGGESTION_COUNT);
        if workouts.is_empty() {
            return "I don't have any workouts to suggest right now.".to_owned();
        }

        let mut reply = format!("Workouts that suit a {goal} phase:");
        for workout in workouts {
            let _ = write!(
                reply,
                "\n- {} ({} min, {}, about {} kcal)",
                workout.name,
                workout.duration_minutes,
                workout.difficulty.as_str(),
                workout.estimated_calories
            );
        }
        reply
    }
}

const HELP_REPLY: &str = "Ask me about your calories, BMI, protein, meal ideas, workouts, \
hydration, sleep, or quitting smoking.";

const HYDRATION_REPLY: &str = "Aim for roughly 30-35 ml of water per kg of body weight each day, \
plus about 500 ml for every hour of training. Pale yellow urine is a good sign you're on track.";

const RECOVERY_REPLY: &str = "Recovery is where progress happens. Get 7-9 hours of sleep, \
keep at least one full rest day a week, and take a lighter session when soreness lingers \
for more than two days.";

const NO_METRICS_HINT: &str = "Run the calculator with your weight, height, age, sex, \
activity level and goal and I'll give you exact numbers.";

fn greeting_reply(context: &AssistantContext) -> String {
    let name = context
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(String::new, |n| format!(", {n}"));
    let mut reply = format!("Hi{name}! I'm your Pulse fitness assistant.");
    if context.metrics.is_none() {
        reply.push_str(" Run the calculator first and I can answer with your own numbers.");
    }
    reply.push(' ');
    reply.push_str(HELP_REPLY);
    reply
}

fn calories_reply(metrics: Option<&MetricResult>) -> String {
    metrics.map_or_else(
        || {
            format!(
                "Your daily calories depend on your BMR and activity level. {NO_METRICS_HINT}"
            )
        },
        |m| {
            format!(
                "Your BMR is {:.0} kcal and your maintenance (TDEE) is {:.0} kcal per day. \
For {} your target is {:.0} kcal per day.",
                m.bmr, m.tdee, m.goal, m.target_calories
            )
        },
    )
}

fn bmi_reply(metrics: Option<&MetricResult>) -> String {
    metrics.map_or_else(
        || {
            format!(
                "BMI is weight in kg divided by height in meters squared. \
18.5-24.9 is the normal range. {NO_METRICS_HINT}"
            )
        },
        |m| {
            format!(
                "Your BMI is {:.1}, which is in the {} range. \
A healthy reference weight for your height is about {:.0} kg.",
                m.bmi, m.bmi_category, m.ideal_weight_kg
            )
        },
    )
}

fn protein_reply(metrics: Option<&MetricResult>) -> String {
    metrics.map_or_else(
        || {
            format!(
                "Most active people do well on 1.6-2.2 g of protein per kg of body weight. \
{NO_METRICS_HINT}"
            )
        },
        |m| {
            format!(
                "Your daily macros: {:.0} g protein, {:.0} g carbs and {:.0} g fat. \
Split the protein across 4-5 meals.",
                m.protein_g, m.carbs_g, m.fat_g
            )
        },
    )
}

fn weight_loss_reply(metrics: Option<&MetricResult>) -> String {
    let base = "Sustainable fat loss comes from a moderate deficit, high protein and \
regular strength training.";
    match metrics {
        Some(m) if m.goal == FitnessGoal::Cutting => format!(
            "{base} Your cutting target is {:.0} kcal per day, {:.0} kcal under maintenance.",
            m.target_calories,
            m.tdee - m.target_calories
        ),
        Some(m) => format!(
            "{base} Your current goal is {}; switch it to cutting and I'll set a deficit from your {:.0} kcal maintenance.",
            m.goal, m.tdee
        ),
        None => format!("{base} {NO_METRICS_HINT}"),
    }
}

fn muscle_gain_reply(metrics: Option<&MetricResult>) -> String {
    let base = "Building muscle needs progressive overload, enough protein and a small \
calorie surplus.";
    match metrics {
        Some(m) if m.goal == FitnessGoal::Bulking => format!(
            "{base} Your bulking target is {:.0} kcal with {:.0} g protein per day.",
            m.target_calories, m.protein_g
        ),
        Some(m) => format!(
            "{base} Your current goal is {}; switch it to bulking for a surplus over your {:.0} kcal maintenance.",
            m.goal, m.tdee
        ),
        None => format!("{base} {NO_METRICS_HINT}"),
    }
}

fn smoking_reply(metrics: Option<&MetricResult>) -> String {
    let base = "Quitting smoking improves lung capacity, recovery and sleep within weeks.";
    match metrics {
        Some(m) if m.is_smoker => m.smoker_recommendations.first().map_or_else(
            || base.to_owned(),
            |tip| format!("{base} Since your plan accounts for smoking: {tip}"),
        ),
        _ => format!(
            "{base} If you smoke, tell the calculator and your targets will be adjusted."
        ),
    }
}

fn motivation_reply(history: &[ChatMessage]) -> String {
    let user_turns = history
        .iter()
        .filter(|m| m.role == MessageRole::User)
        .count();
    MOTIVATION_LINES[user_turns % MOTIVATION_LINES.len()].to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn short_greeting_is_detected() {
        assert_eq!(Intent::detect("Hello!"), Intent::Greeting);
        assert_eq!(Intent::detect("hey there"), Intent::Greeting);
    }

    #[test]
    fn long_message_starting_with_hi_uses_topic() {
        assert_eq!(
            Intent::detect("hi, can you tell me my bmi please"),
            Intent::Bmi
        );
    }

    #[test]
    fn priority_order_wins_on_overlap() {
        // calories outranks meal ideas
        assert_eq!(
            Intent::detect("how many calories should my breakfast have"),
            Intent::Calories
        );
        assert_eq!(Intent::detect("I want to lose weight"), Intent::WeightLoss);
        assert_eq!(Intent::detect("what is the weather"), Intent::Help);
    }

    #[test]
    fn phrases_match_on_word_boundaries() {
        assert_eq!(Intent::detect("what's a healthy weight?"), Intent::Bmi);
        assert_eq!(Intent::detect("cutting carbs"), Intent::Protein);
    }
}
