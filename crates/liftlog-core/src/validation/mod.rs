// ABOUTME: Pure validation rules for exercise logs, credentials and catalog input
// ABOUTME: Produces field-tagged ValidationResult lists; never panics on any input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Validation
//!
//! Validators are total functions over well-typed input. Composite validators
//! run every independent check and report each violated rule exactly once,
//! tagged with the field path the UI highlights (`exercise.name`,
//! `sets[2].reps`, `confirmPassword`, `workoutDays[0].exercises[1].maxReps`).

mod auth;
mod catalog;
mod exercise;
mod plan;

pub use auth::{
    validate_email, validate_login_credentials, validate_password,
    validate_register_credentials, validate_username,
};
pub use catalog::{validate_catalog_exercise, validate_muscle_group};
pub use exercise::{
    validate_exercise, validate_exercise_group, validate_exercise_name, validate_reps,
    validate_set, validate_sets, validate_weight,
};
pub use plan::validate_workout_plan;

use crate::constants::messages;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// A single violated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field path, e.g. `sets[0].weight`
    pub field: String,
    /// English message describing the rule
    pub message: String,
}

impl FieldError {
    /// Create a field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of one validation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub valid: bool,
    /// Violations in check order
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    /// A passing result
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a result from collected errors
    #[must_use]
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Messages joined with `", "`
    #[must_use]
    pub fn joined_messages(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether any error is tagged with `field`
    #[must_use]
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Convert into `Ok(())` or an `InvalidInput` error prefixed with `"Validation failed: "`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` listing every violated rule when the
    /// result is not valid.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.valid {
            return Ok(());
        }
        Err(AppError::invalid_input(format!(
            "{}{}",
            messages::VALIDATION_FAILED,
            self.joined_messages()
        )))
    }
}
