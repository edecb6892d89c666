// ABOUTME: Training-metric calculators for the LiftLog workout-logging client
// ABOUTME: Volume, rep, weight and one-rep-max arithmetic over logged sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Intelligence
//!
//! Pure, deterministic calculators deriving training metrics from logged
//! sets. Nothing in this crate performs I/O; formatters and services reuse
//! these functions instead of repeating the arithmetic.

/// Per-set and per-entry metric calculators
pub mod metrics;

pub use metrics::{
    calculate_average_weight, calculate_max_weight, calculate_one_rep_max, calculate_set_volume,
    calculate_total_reps, calculate_total_volume, ExerciseMetrics,
};
