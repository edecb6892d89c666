// ABOUTME: Strength-training metric calculators: volume, reps, weights, estimated 1RM
// ABOUTME: Pure functions plus an ExerciseMetrics aggregate reused by display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength-training metrics
//!
//! Every calculator returns `0` for empty input rather than failing.

use liftlog_core::models::ExerciseSet;
use serde::{Deserialize, Serialize};

/// Divisor of the Epley one-rep-max estimate
const EPLEY_REPS_DIVISOR: f64 = 30.0;

/// Round half away from zero to `decimals` places
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Volume of one set: `weight * reps`
#[must_use]
pub fn calculate_set_volume(set: &ExerciseSet) -> f64 {
    set.weight * f64::from(set.reps)
}

/// Sum of set volumes
#[must_use]
pub fn calculate_total_volume(sets: &[ExerciseSet]) -> f64 {
    sets.iter().map(calculate_set_volume).sum()
}

/// Sum of repetitions
#[must_use]
pub fn calculate_total_reps(sets: &[ExerciseSet]) -> u64 {
    sets.iter().map(|set| u64::from(set.reps)).sum()
}

/// Mean weight across sets, rounded to 2 decimals
#[must_use]
pub fn calculate_average_weight(sets: &[ExerciseSet]) -> f64 {
    if sets.is_empty() {
        return 0.0;
    }
    let total: f64 = sets.iter().map(|set| set.weight).sum();
    round_to(total / sets.len() as f64, 2)
}

/// Heaviest weight across sets
#[must_use]
pub fn calculate_max_weight(sets: &[ExerciseSet]) -> f64 {
    sets.iter().map(|set| set.weight).fold(0.0, f64::max)
}

/// Estimated one-rep max of a set using the Epley formula, rounded to 1 decimal
///
/// `weight * (1 + reps / 30)`. A single rep returns the weight unchanged, and
/// a zero weight or zero reps returns `0`.
///
/// The estimate is only meaningful for low rep ranges (roughly 1 to 10); at
/// high rep counts it extrapolates well past anything liftable and is
/// returned as computed.
#[must_use]
pub fn calculate_one_rep_max(set: &ExerciseSet) -> f64 {
    if set.weight == 0.0 || set.reps == 0 {
        return 0.0;
    }
    if set.reps == 1 {
        return set.weight;
    }
    round_to(
        set.weight * (1.0 + f64::from(set.reps) / EPLEY_REPS_DIVISOR),
        1,
    )
}

/// Aggregate metrics for one logged exercise
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseMetrics {
    /// Number of sets
    pub set_count: usize,
    /// Sum of repetitions
    pub total_reps: u64,
    /// Sum of set volumes, kg
    pub total_volume: f64,
    /// Mean weight, kg, 2 decimals
    pub average_weight: f64,
    /// Heaviest weight, kg
    pub max_weight: f64,
    /// Best per-set estimated one-rep max, kg
    pub best_one_rep_max: f64,
}

impl ExerciseMetrics {
    /// Compute every metric for `sets`
    #[must_use]
    pub fn from_sets(sets: &[ExerciseSet]) -> Self {
        Self {
            set_count: sets.len(),
            total_reps: calculate_total_reps(sets),
            total_volume: calculate_total_volume(sets),
            average_weight: calculate_average_weight(sets),
            max_weight: calculate_max_weight(sets),
            best_one_rep_max: sets.iter().map(calculate_one_rep_max).fold(0.0, f64::max),
        }
    }
}
