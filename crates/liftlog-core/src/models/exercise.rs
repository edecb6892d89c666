// ABOUTME: Exercise log models: sets, exercises, log entries and aggregate stats
// ABOUTME: Shared JSON shape for local storage records and remote log payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One set of an exercise: a load lifted for a number of repetitions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Load in kilograms
    pub weight: f64,
    /// Completed repetitions
    pub reps: u32,
}

impl ExerciseSet {
    /// Create a set
    #[must_use]
    pub const fn new(weight: f64, reps: u32) -> Self {
        Self { weight, reps }
    }
}

/// The exercise being logged, identified by muscle group and name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Muscle group name, e.g. `CHEST`
    pub group: String,
    /// Exercise name, e.g. `Bench Press`
    pub name: String,
}

impl Exercise {
    /// Create an exercise reference
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

/// A logged exercise with its ordered sets
///
/// Once persisted an entry is never edited; it can only be deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLogEntry {
    /// Point in time the exercise was performed, as text
    ///
    /// Accepted forms are RFC 3339 and the stored `DD/MM/YYYY HH:mm:ss` form.
    pub timestamp: String,
    /// What was performed
    pub exercise: Exercise,
    /// Sets in the order they were performed
    pub sets: Vec<ExerciseSet>,
    /// Whether the last set was taken to failure
    #[serde(default)]
    pub failure: bool,
}

/// Aggregate over every logged exercise
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStats {
    /// Number of log entries
    pub total_exercises: usize,
    /// Number of sets across all entries
    pub total_sets: usize,
    /// Sum of per-entry volume, in kilograms
    pub total_volume: f64,
}
