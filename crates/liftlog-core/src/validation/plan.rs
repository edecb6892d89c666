// ABOUTME: Validation rules for workout plans, their days and exercise targets
// ABOUTME: Checks name, duration, day labels, target sets and min/max rep ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FieldError, ValidationResult};
use crate::constants::limits::{
    MAX_PLAN_DAYS, MAX_PLAN_DAY_DESCRIPTION_LENGTH, MAX_PLAN_DURATION, MAX_PLAN_NAME_LENGTH,
    MAX_REPS, MAX_TARGET_SETS,
};
use crate::models::{ExerciseTarget, WorkoutPlan};

fn validate_target(target: &ExerciseTarget, path: &str, errors: &mut Vec<FieldError>) {
    if target.exercise.id.trim().is_empty() || target.exercise.name.trim().is_empty() {
        errors.push(FieldError::new(
            format!("{path}.exercise"),
            "Target must reference a catalog exercise",
        ));
    }
    if !(1..=MAX_TARGET_SETS).contains(&target.sets) {
        errors.push(FieldError::new(
            format!("{path}.sets"),
            format!("Target sets must be between 1 and {MAX_TARGET_SETS}"),
        ));
    }
    if !(1..=MAX_REPS).contains(&target.min_reps) {
        errors.push(FieldError::new(
            format!("{path}.minReps"),
            format!("Minimum reps must be between 1 and {MAX_REPS}"),
        ));
    }
    if !(1..=MAX_REPS).contains(&target.max_reps) {
        errors.push(FieldError::new(
            format!("{path}.maxReps"),
            format!("Maximum reps must be between 1 and {MAX_REPS}"),
        ));
    } else if target.max_reps < target.min_reps {
        errors.push(FieldError::new(
            format!("{path}.maxReps"),
            "Maximum reps cannot be lower than minimum reps",
        ));
    }
}

/// Validate a workout plan before it is created or updated
///
/// Order: name, duration, day count, then every day and its targets. Field
/// paths follow the backend shape, e.g. `workoutDays[0].exercises[1].minReps`.
#[must_use]
pub fn validate_workout_plan(plan: &WorkoutPlan) -> ValidationResult {
    let mut errors = Vec::new();

    let name = plan.name.trim();
    if name.is_empty() || name.chars().count() > MAX_PLAN_NAME_LENGTH {
        errors.push(FieldError::new(
            "name",
            format!("Plan name is required (max {MAX_PLAN_NAME_LENGTH} characters)"),
        ));
    }
    if !(1..=MAX_PLAN_DURATION).contains(&plan.duration) {
        errors.push(FieldError::new(
            "duration",
            format!(
                "Duration must be between 1 and {MAX_PLAN_DURATION} {}",
                plan.duration_unit
            ),
        ));
    }
    if plan.workout_days.len() > MAX_PLAN_DAYS {
        errors.push(FieldError::new(
            "workoutDays",
            format!("Cannot have more than {MAX_PLAN_DAYS} workout days"),
        ));
    }

    for (day_index, day) in plan.workout_days.iter().enumerate() {
        let description = day.description.trim();
        if description.is_empty() || description.chars().count() > MAX_PLAN_DAY_DESCRIPTION_LENGTH {
            errors.push(FieldError::new(
                format!("workoutDays[{day_index}].description"),
                format!(
                    "Day {}: description is required (max {MAX_PLAN_DAY_DESCRIPTION_LENGTH} characters)",
                    day_index + 1
                ),
            ));
        }
        for (target_index, target) in day.exercises.iter().enumerate() {
            let path = format!("workoutDays[{day_index}].exercises[{target_index}]");
            validate_target(target, &path, &mut errors);
        }
    }

    ValidationResult::from_errors(errors)
}
