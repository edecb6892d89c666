// ABOUTME: Workout plan models: plans, training days and per-exercise targets
// ABOUTME: Serialized in the backend's camelCase shape, including the workoutDayDTOList field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults::{TARGET_MAX_REPS, TARGET_MIN_REPS, TARGET_SETS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of [`WorkoutPlan::duration`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DurationUnit {
    /// Calendar weeks
    #[default]
    Weeks,
    /// Calendar months
    Months,
}

impl DurationUnit {
    /// Parse `weeks` / `months` in any case
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "weeks" | "week" | "w" => Some(Self::Weeks),
            "months" | "month" | "m" => Some(Self::Months),
            _ => None,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weeks => f.write_str("weeks"),
            Self::Months => f.write_str("months"),
        }
    }
}

/// Catalog exercise referenced by a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetExercise {
    /// Catalog id, as text
    pub id: String,
    /// Exercise name
    pub name: String,
    /// Muscle group name
    pub group: String,
}

/// Planned sets and rep range for one exercise of a workout day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTarget {
    /// Backend id, absent until saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The exercise to perform
    pub exercise: TargetExercise,
    /// Planned sets
    pub sets: u32,
    /// Lower bound of the rep range
    pub min_reps: u32,
    /// Upper bound of the rep range
    pub max_reps: u32,
}

impl ExerciseTarget {
    /// Target for `exercise` with the default 3 x 8-12 prescription
    #[must_use]
    pub const fn new(exercise: TargetExercise) -> Self {
        Self {
            id: None,
            exercise,
            sets: TARGET_SETS,
            min_reps: TARGET_MIN_REPS,
            max_reps: TARGET_MAX_REPS,
        }
    }
}

/// One training day of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Backend id, absent until saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Label, e.g. `Day 1` or `Push`
    pub description: String,
    /// Owning plan id as reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_plan_id: Option<String>,
    /// Exercises in the order they are performed
    #[serde(default)]
    pub exercises: Vec<ExerciseTarget>,
}

/// A multi-week training plan owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Backend id, absent until saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Plan name
    pub name: String,
    /// Length of the plan in `duration_unit`
    pub duration: u32,
    /// Unit of `duration`
    #[serde(default)]
    pub duration_unit: DurationUnit,
    /// Whether this is the plan the user currently follows
    #[serde(default)]
    pub is_active: bool,
    /// Training days
    #[serde(rename = "workoutDayDTOList", default)]
    pub workout_days: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    /// Unsaved, inactive plan without days
    pub fn new(name: impl Into<String>, duration: u32, duration_unit: DurationUnit) -> Self {
        Self {
            id: None,
            name: name.into(),
            duration,
            duration_unit,
            is_active: false,
            workout_days: Vec::new(),
        }
    }

    /// Number of exercise targets across all days
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.workout_days.iter().map(|d| d.exercises.len()).sum()
    }
}
