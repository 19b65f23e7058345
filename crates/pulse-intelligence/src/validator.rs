// ABOUTME: Input validation for the fitness metrics calculator
// ABOUTME: Names the first missing required field and rejects unusable values before computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pulse_core::constants::nutrition::input::MAX_AGE_YEARS;
use pulse_core::errors::{InputField, ValidationError};
use pulse_core::models::{ActivityLevel, FitnessGoal, MeasurementInput, Sex, UserMeasurementInput};

/// Validate raw measurement input
///
/// Required fields are checked in the order weight, height, age, sex,
/// activity level, goal; the first absent or blank one is reported. Present
/// values must then be usable: weight and height positive and finite, age
/// between 1 and 130 years, and enum keys known.
///
/// # Errors
///
/// - `ValidationError::MissingField` for the first absent field
/// - `ValidationError::InvalidValue` for a present but unusable value
pub fn validate(input: &MeasurementInput) -> Result<UserMeasurementInput, ValidationError> {
    if let Some(field) = first_missing_field(input) {
        return Err(ValidationError::missing(field));
    }

    let weight_kg = positive_measure(input.weight_kg, InputField::Weight)?;
    let height_cm = positive_measure(input.height_cm, InputField::Height)?;
    let age_years = age(input.age_years)?;

    let sex = parse_key(input.sex.as_deref(), InputField::Sex, Sex::parse)?;
    let activity_level = parse_key(
        input.activity_level.as_deref(),
        InputField::ActivityLevel,
        ActivityLevel::parse,
    )?;
    let goal = parse_key(input.goal.as_deref(), InputField::Goal, FitnessGoal::parse)?;

    Ok(UserMeasurementInput {
        weight_kg,
        height_cm,
        age_years,
        sex,
        activity_level,
        goal,
        is_smoker: input.is_smoker.unwrap_or(false),
    })
}

/// First required field that is absent or blank, in validation order
#[must_use]
pub fn first_missing_field(input: &MeasurementInput) -> Option<InputField> {
    let blank = |s: &Option<String>| s.as_deref().map_or(true, |v| v.trim().is_empty());

    InputField::REQUIRED.into_iter().find(|field| match field {
        InputField::Weight => input.weight_kg.is_none(),
        InputField::Height => input.height_cm.is_none(),
        InputField::Age => input.age_years.is_none(),
        InputField::Sex => blank(&input.sex),
        InputField::ActivityLevel => blank(&input.activity_level),
        InputField::Goal => blank(&input.goal),
    })
}

fn positive_measure(value: Option<f64>, field: InputField) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::missing(field))?;
    if !value.is_finite() {
        return Err(ValidationError::invalid(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(ValidationError::invalid(
            field,
            format!("must be greater than zero, got {value}"),
        ));
    }
    Ok(value)
}

fn age(value: Option<i64>) -> Result<u32, ValidationError> {
    let value = value.ok_or(ValidationError::missing(InputField::Age))?;
    if value <= 0 {
        return Err(ValidationError::invalid(
            InputField::Age,
            format!("must be greater than zero, got {value}"),
        ));
    }
    if value > MAX_AGE_YEARS {
        return Err(ValidationError::invalid(
            InputField::Age,
            format!("must be at most {MAX_AGE_YEARS} years, got {value}"),
        ));
    }
    u32::try_from(value).map_err(|_| ValidationError::invalid(InputField::Age, "is too large"))
}

fn parse_key<T>(
    value: Option<&str>,
    field: InputField,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    let raw = value.ok_or(ValidationError::missing(field))?;
    parse(raw).ok_or_else(|| ValidationError::invalid(field, format!("unknown value '{raw}'")))
}
