// ABOUTME: Validation error taxonomy for calculator and tracking inputs
// ABOUTME: Distinguishes missing required fields from present-but-invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fields of a measurement input, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Body weight in kilograms
    Weight,
    /// Height in centimeters
    Height,
    /// Age in years
    Age,
    /// Biological sex
    Sex,
    /// Activity level
    ActivityLevel,
    /// Dietary goal
    Goal,
}

impl InputField {
    /// Required fields in the order the validator checks them
    pub const REQUIRED: [Self; 6] = [
        Self::Weight,
        Self::Height,
        Self::Age,
        Self::Sex,
        Self::ActivityLevel,
        Self::Goal,
    ];

    /// Wire name of the field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Age => "age",
            Self::Sex => "sex",
            Self::ActivityLevel => "activity_level",
            Self::Goal => "goal",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced before any metric is computed
///
/// No partial result exists when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent or empty
    #[error("missing required field: {field}")]
    MissingField {
        /// The first missing field in validation order
        field: InputField,
    },
    /// A field was present but unusable (non-positive, non-finite, unknown enum value)
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field
        field: InputField,
        /// Why the value was rejected
        reason: String,
    },
    /// Inputs were individually valid but produce non-positive energy figures
    #[error("implausible measurements: {reason}")]
    Implausible {
        /// Why the combination was rejected
        reason: String,
    },
}

impl ValidationError {
    /// Create a missing-field error
    #[must_use]
    pub const fn missing(field: InputField) -> Self {
        Self::MissingField { field }
    }

    /// Create an invalid-value error
    pub fn invalid(field: InputField, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Field this error refers to, if any
    #[must_use]
    pub const fn field(&self) -> Option<InputField> {
        match self {
            Self::MissingField { field } | Self::InvalidValue { field, .. } => Some(*field),
            Self::Implausible { .. } => None,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match error {
            ValidationError::MissingField { .. } => ErrorCode::MissingRequiredField,
            ValidationError::InvalidValue { .. } | ValidationError::Implausible { .. } => {
                ErrorCode::InvalidInput
            }
        };
        let details = error.field().map_or(serde_json::Value::Null, |field| {
            serde_json::json!({ "field": field.as_str() })
        });

        Self::new(code, error.to_string()).with_details(details)
    }
}
