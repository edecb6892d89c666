// ABOUTME: Validation rules for admin catalog input (muscle groups and exercises)
// ABOUTME: Checked before any catalog port call so backends only see well-formed requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::{validate_exercise_group, validate_exercise_name};
use super::{FieldError, ValidationResult};
use crate::constants::limits::{
    MAX_EXERCISE_NAME_LENGTH, MAX_MUSCLE_GROUP_DESCRIPTION_LENGTH, MAX_MUSCLE_GROUP_NAME_LENGTH,
};
use crate::models::{CatalogExerciseRequest, MuscleGroupRequest};

/// Validate a muscle group create/update request
#[must_use]
pub fn validate_muscle_group(request: &MuscleGroupRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let name = request.name.trim();
    if name.is_empty() || name.chars().count() > MAX_MUSCLE_GROUP_NAME_LENGTH {
        errors.push(FieldError::new(
            "name",
            format!("Muscle group name is required (max {MAX_MUSCLE_GROUP_NAME_LENGTH} characters)"),
        ));
    }
    let description_too_long = request
        .description
        .as_deref()
        .is_some_and(|d| d.chars().count() > MAX_MUSCLE_GROUP_DESCRIPTION_LENGTH);
    if description_too_long {
        errors.push(FieldError::new(
            "description",
            format!("Description cannot exceed {MAX_MUSCLE_GROUP_DESCRIPTION_LENGTH} characters"),
        ));
    }
    ValidationResult::from_errors(errors)
}

/// Validate a catalog exercise create/update request: group, then name
#[must_use]
pub fn validate_catalog_exercise(request: &CatalogExerciseRequest) -> ValidationResult {
    let mut errors = Vec::new();
    if !validate_exercise_group(&request.group) {
        errors.push(FieldError::new("group", "Exercise group is required"));
    }
    if !validate_exercise_name(&request.name) {
        errors.push(FieldError::new(
            "name",
            format!("Exercise name is required (max {MAX_EXERCISE_NAME_LENGTH} characters)"),
        ));
    }
    ValidationResult::from_errors(errors)
}
