// ABOUTME: Integration tests for the metrics calculator, validator, and BMI classifier
// ABOUTME: Worked examples, smoker adjustments, carb clamping, and validation ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{carb_clamp_measurements, sample_measurements};
use pulse_core::errors::{AppError, ErrorCode, InputField, ValidationError};
use pulse_core::models::{
    ActivityLevel, BmiCategory, FitnessGoal, MeasurementInput, MetricWarning, Sex,
};
use pulse_intelligence::calculator::{activity_multiplier, calculate_bmr, ideal_weight_kg};
use pulse_intelligence::validator::first_missing_field;
use pulse_intelligence::{calculate, classify_bmi, validate};

// ============================================================================
// Worked Examples
// ============================================================================

#[test]
fn test_male_cutting_worked_example() {
    let result = calculate(&sample_measurements()).unwrap();

    assert!((result.bmi - 24.5).abs() < f64::EPSILON);
    assert_eq!(result.bmi_category, BmiCategory::Normal);
    assert!((result.bmr - 1763.0).abs() < f64::EPSILON);
    assert!((result.tdee - 2733.0).abs() < f64::EPSILON);
    assert!((result.target_calories - 2233.0).abs() < f64::EPSILON);
    assert!((result.protein_g - 165.0).abs() < f64::EPSILON);
    assert!((result.fat_g - 60.0).abs() < f64::EPSILON);
    assert!((result.carbs_g - 258.0).abs() < f64::EPSILON);
    assert!((result.ideal_weight_kg - 67.0).abs() < f64::EPSILON);
    assert_eq!(result.goal, FitnessGoal::Cutting);
    assert!(!result.is_smoker);
    assert_eq!(result.recommendations.len(), 5);
    assert!(result.smoker_recommendations.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_smoker_raises_bmr_and_softens_deficit() {
    let input = MeasurementInput {
        is_smoker: Some(true),
        ..sample_measurements()
    };
    let result = calculate(&input).unwrap();

    assert!((result.bmr - 1886.0).abs() < f64::EPSILON);
    assert!((result.tdee - 2923.0).abs() < f64::EPSILON);
    assert!((result.target_calories - 2623.0).abs() < f64::EPSILON);
    assert!((result.protein_g - 188.0).abs() < f64::EPSILON);
    assert!((result.fat_g - 60.0).abs() < f64::EPSILON);
    assert!((result.carbs_g - 333.0).abs() < f64::EPSILON);
    assert!(result.is_smoker);
    assert_eq!(result.smoker_recommendations.len(), 6);
}

#[test]
fn test_bulking_adds_surplus() {
    let input = MeasurementInput {
        goal: Some("bulking".to_owned()),
        ..sample_measurements()
    };
    let result = calculate(&input).unwrap();

    assert!((result.target_calories - 3233.0).abs() < f64::EPSILON);
    assert!((result.protein_g - 188.0).abs() < f64::EPSILON);
    assert!((result.fat_g - 90.0).abs() < f64::EPSILON);
    assert!((result.carbs_g - 418.0).abs() < f64::EPSILON);
}

#[test]
fn test_maintenance_keeps_tdee() {
    let input = MeasurementInput {
        goal: Some("maintenance".to_owned()),
        ..sample_measurements()
    };
    let result = calculate(&input).unwrap();

    assert!((result.target_calories - result.tdee).abs() < f64::EPSILON);
    assert!((result.protein_g - 150.0).abs() < f64::EPSILON);
    assert!((result.fat_g - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_female_bmr_uses_female_coefficients() {
    let bmr = calculate_bmr(60.0, 165.0, 30, Sex::Female, false);
    // 447.593 + 9.247*60 + 3.098*165 - 4.330*30
    assert!((bmr - 1383.683).abs() < 1e-6);
}

#[test]
fn test_calculation_is_deterministic() {
    let input = sample_measurements();
    let first = calculate(&input).unwrap();
    let second = calculate(&input).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Properties Over Many Inputs
// ============================================================================

#[test]
fn test_target_and_macros_hold_across_inputs() {
    for weight in [50.0, 75.0, 110.0] {
        for sex in ["male", "female"] {
            for activity in ["sedentary", "light", "moderate", "active", "very_active"] {
                for goal in ["cutting", "bulking", "maintenance"] {
                    for smoker in [false, true] {
                        let input = MeasurementInput {
                            weight_kg: Some(weight),
                            height_cm: Some(172.0),
                            age_years: Some(35),
                            sex: Some(sex.to_owned()),
                            activity_level: Some(activity.to_owned()),
                            goal: Some(goal.to_owned()),
                            is_smoker: Some(smoker),
                        };
                        let result = calculate(&input).unwrap();

                        assert!(result.tdee >= result.bmr, "{input:?}");
                        assert!(result.target_calories > 0.0);
                        assert!(result.carbs_g >= 0.0);
                        assert!(result.protein_g >= 0.0 && result.fat_g >= 0.0);
                        assert_eq!(result.bmi_category, classify_bmi(result.bmi));
                    }
                }
            }
        }
    }
}

#[test]
fn test_activity_multipliers_are_ordered() {
    let levels = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];
    for pair in levels.windows(2) {
        assert!(activity_multiplier(pair[0]) < activity_multiplier(pair[1]));
    }
}

#[test]
fn test_ideal_weight_uses_reference_bmi() {
    assert!((ideal_weight_kg(200.0) - 88.0).abs() < 1e-9);
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn test_carbs_clamped_with_warning() {
    let result = calculate(&carb_clamp_measurements()).unwrap();

    assert!((result.target_calories - 1844.0).abs() < f64::EPSILON);
    assert!((result.protein_g - 330.0).abs() < f64::EPSILON);
    assert!((result.fat_g - 120.0).abs() < f64::EPSILON);
    assert!(result.carbs_g.abs() < f64::EPSILON);
    assert_eq!(
        result.warnings,
        vec![MetricWarning::CarbsClamped { unclamped_g: -139.0 }]
    );
}

#[test]
fn test_non_positive_target_is_implausible() {
    let input = MeasurementInput {
        weight_kg: Some(1.0),
        height_cm: Some(1.0),
        age_years: Some(100),
        sex: Some("female".to_owned()),
        activity_level: Some("sedentary".to_owned()),
        goal: Some("cutting".to_owned()),
        is_smoker: None,
    };

    let err = calculate(&input).unwrap_err();
    assert!(matches!(err, ValidationError::Implausible { .. }));
    assert_eq!(err.field(), None);

    let app_error: AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::InvalidInput);
    assert!(app_error.details.is_null());
}

#[test]
fn test_non_positive_bmr_is_implausible_even_with_positive_target() {
    // BMR -7, TDEE -8, bulking target 492
    let input = MeasurementInput {
        weight_kg: Some(5.0),
        height_cm: Some(20.0),
        age_years: Some(130),
        sex: Some("female".to_owned()),
        activity_level: Some("sedentary".to_owned()),
        goal: Some("bulking".to_owned()),
        is_smoker: None,
    };

    let err = calculate(&input).unwrap_err();
    assert!(matches!(err, ValidationError::Implausible { .. }));
    assert_eq!(err.field(), None);
}

#[test]
fn test_age_above_limit_is_invalid() {
    let input = MeasurementInput {
        age_years: Some(131),
        ..sample_measurements()
    };
    let err = validate(&input).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidValue {
            field: InputField::Age,
            ..
        }
    ));

    let oldest = MeasurementInput {
        age_years: Some(130),
        ..sample_measurements()
    };
    assert_eq!(validate(&oldest).unwrap().age_years, 130);
}

#[test]
fn test_small_negative_carb_remainder_is_clamped() {
    // TDEE 1852 against 218 g protein and 109 g fat (1853 kcal) leaves -0.25 g
    let input = MeasurementInput {
        weight_kg: Some(109.0),
        height_cm: Some(140.0),
        age_years: Some(80),
        sex: Some("female".to_owned()),
        activity_level: Some("sedentary".to_owned()),
        goal: Some("maintenance".to_owned()),
        is_smoker: Some(false),
    };

    let result = calculate(&input).unwrap();
    assert!((result.target_calories - 1852.0).abs() < f64::EPSILON);
    assert!(result.carbs_g.abs() < f64::EPSILON);
    assert!(result.carbs_g.is_sign_positive());
    assert_eq!(result.warnings.len(), 1);
    let MetricWarning::CarbsClamped { unclamped_g } = result.warnings[0];
    assert!(unclamped_g < 0.0 && unclamped_g > -0.5);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_missing_fields_reported_in_order() {
    let mut input = MeasurementInput::default();
    let expected = [
        InputField::Weight,
        InputField::Height,
        InputField::Age,
        InputField::Sex,
        InputField::ActivityLevel,
        InputField::Goal,
    ];

    for field in expected {
        assert_eq!(first_missing_field(&input), Some(field));
        assert_eq!(validate(&input).unwrap_err(), ValidationError::missing(field));
        match field {
            InputField::Weight => input.weight_kg = Some(75.0),
            InputField::Height => input.height_cm = Some(175.0),
            InputField::Age => input.age_years = Some(30),
            InputField::Sex => input.sex = Some("male".to_owned()),
            InputField::ActivityLevel => input.activity_level = Some("moderate".to_owned()),
            InputField::Goal => input.goal = Some("cutting".to_owned()),
        }
    }

    assert_eq!(first_missing_field(&input), None);
    assert!(validate(&input).is_ok());
}

#[test]
fn test_blank_text_counts_as_missing() {
    let input = MeasurementInput {
        sex: Some("   ".to_owned()),
        ..sample_measurements()
    };
    assert_eq!(
        validate(&input).unwrap_err(),
        ValidationError::missing(InputField::Sex)
    );
}

#[test]
fn test_missing_field_wins_over_invalid_value() {
    let input = MeasurementInput {
        weight_kg: Some(-10.0),
        goal: None,
        ..sample_measurements()
    };
    assert_eq!(
        validate(&input).unwrap_err(),
        ValidationError::missing(InputField::Goal)
    );
}

#[test]
fn test_invalid_values_name_their_field() {
    let cases = [
        (
            MeasurementInput {
                weight_kg: Some(0.0),
                ..sample_measurements()
            },
            InputField::Weight,
        ),
        (
            MeasurementInput {
                height_cm: Some(f64::NAN),
                ..sample_measurements()
            },
            InputField::Height,
        ),
        (
            MeasurementInput {
                age_years: Some(-5),
                ..sample_measurements()
            },
            InputField::Age,
        ),
        (
            MeasurementInput {
                sex: Some("other".to_owned()),
                ..sample_measurements()
            },
            InputField::Sex,
        ),
        (
            MeasurementInput {
                activity_level: Some("extreme".to_owned()),
                ..sample_measurements()
            },
            InputField::ActivityLevel,
        ),
        (
            MeasurementInput {
                goal: Some("shred".to_owned()),
                ..sample_measurements()
            },
            InputField::Goal,
        ),
    ];

    for (input, field) in cases {
        let err = validate(&input).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidValue { field: f, .. } if f == field),
            "expected invalid {field}, got {err:?}"
        );
    }
}

#[test]
fn test_validation_error_maps_to_app_error() {
    let missing: AppError = ValidationError::missing(InputField::ActivityLevel).into();
    assert_eq!(missing.code, ErrorCode::MissingRequiredField);
    assert_eq!(missing.details["field"], "activity_level");
    assert_eq!(missing.http_status(), 400);

    let invalid: AppError = ValidationError::invalid(InputField::Age, "too old").into();
    assert_eq!(invalid.code, ErrorCode::InvalidInput);
    assert_eq!(invalid.details["field"], "age");
}

#[test]
fn test_enum_keys_accept_aliases() {
    let input = MeasurementInput {
        sex: Some("F".to_owned()),
        activity_level: Some("very_active".to_owned()),
        goal: Some("bulk".to_owned()),
        ..sample_measurements()
    };
    let validated = validate(&input).unwrap();
    assert_eq!(validated.sex, Sex::Female);
    assert_eq!(validated.activity_level, ActivityLevel::VeryActive);
    assert_eq!(validated.goal, FitnessGoal::Bulking);
    assert!(!validated.is_smoker);
}

#[test]
fn test_input_accepts_short_json_keys() {
    let input: MeasurementInput = serde_json::from_value(serde_json::json!({
        "weight": 75,
        "height": 175,
        "age": 30,
        "gender": "male",
        "activity": "moderate",
        "goal": "cutting"
    }))
    .unwrap();

    assert_eq!(input.weight_kg, Some(75.0));
    assert_eq!(input.sex.as_deref(), Some("male"));
    assert!((calculate(&input).unwrap().target_calories - 2233.0).abs() < f64::EPSILON);
}

// ============================================================================
// BMI Bands
// ============================================================================

#[test]
fn test_bmi_band_boundaries_belong_to_upper_band() {
    assert_eq!(classify_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
    assert_eq!(classify_bmi(24.9), BmiCategory::Normal);
    assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(classify_bmi(29.9), BmiCategory::Overweight);
    assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
}
