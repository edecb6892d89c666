// ABOUTME: Validation rules for logged sets and exercise log entries
// ABOUTME: Weight and rep ranges, set-count bounds, name and group presence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FieldError, ValidationResult};
use crate::constants::limits::{MAX_EXERCISE_NAME_LENGTH, MAX_REPS, MAX_SETS, MAX_WEIGHT_KG};
use crate::models::{ExerciseLogEntry, ExerciseSet};

/// True iff `weight` is finite and in `(0, 1000]`
#[must_use]
pub fn validate_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0 && weight <= MAX_WEIGHT_KG
}

/// True iff `reps` is a finite whole number in `(0, 1000]`
///
/// Takes `f64` so raw numeric input (CLI arguments, decoded payloads) can be
/// checked before it is narrowed into an [`ExerciseSet`].
#[must_use]
pub fn validate_reps(reps: f64) -> bool {
    reps.is_finite() && reps > 0.0 && reps.fract() == 0.0 && reps <= f64::from(MAX_REPS)
}

/// True iff `name` is non-empty after trimming and at most 100 characters
#[must_use]
pub fn validate_exercise_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= MAX_EXERCISE_NAME_LENGTH
}

/// True iff `group` is non-empty after trimming
#[must_use]
pub fn validate_exercise_group(group: &str) -> bool {
    !group.trim().is_empty()
}

/// Field errors of one set at position `index`
#[must_use]
pub fn validate_set(index: usize, set: &ExerciseSet) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let number = index + 1;

    if !validate_weight(set.weight) {
        errors.push(FieldError::new(
            format!("sets[{index}].weight"),
            format!("Set {number}: Weight must be a positive number (max {MAX_WEIGHT_KG}kg)"),
        ));
    }
    if !validate_reps(f64::from(set.reps)) {
        errors.push(FieldError::new(
            format!("sets[{index}].reps"),
            format!("Set {number}: Reps must be a positive whole number (max {MAX_REPS})"),
        ));
    }

    errors
}

/// Validate an ordered sequence of sets
///
/// An empty or oversized sequence yields exactly one `sets` error and no
/// per-set checks; otherwise every set is checked.
#[must_use]
pub fn validate_sets(sets: &[ExerciseSet]) -> ValidationResult {
    if sets.is_empty() {
        return ValidationResult::from_errors(vec![FieldError::new(
            "sets",
            "Must have at least one set",
        )]);
    }
    if sets.len() > MAX_SETS {
        return ValidationResult::from_errors(vec![FieldError::new(
            "sets",
            format!("Cannot have more than {MAX_SETS} sets (too many sets provided)"),
        )]);
    }

    let errors = sets
        .iter()
        .enumerate()
        .flat_map(|(index, set)| validate_set(index, set))
        .collect();
    ValidationResult::from_errors(errors)
}

/// Validate a complete log entry: timestamp, group, name, then sets
#[must_use]
pub fn validate_exercise(entry: &ExerciseLogEntry) -> ValidationResult {
    let mut errors = Vec::new();

    if entry.timestamp.trim().is_empty() {
        errors.push(FieldError::new("timestamp", "Timestamp is required"));
    }
    if !validate_exercise_group(&entry.exercise.group) {
        errors.push(FieldError::new(
            "exercise.group",
            "Exercise group is required",
        ));
    }
    if !validate_exercise_name(&entry.exercise.name) {
        errors.push(FieldError::new(
            "exercise.name",
            format!("Exercise name is required (max {MAX_EXERCISE_NAME_LENGTH} characters)"),
        ));
    }
    errors.extend(validate_sets(&entry.sets).errors);

    ValidationResult::from_errors(errors)
}
