// ABOUTME: Argument parsing helpers for the liftlog CLI
// ABOUTME: Turns WEIGHTxREPS strings into typed sets and DAY=ID,ID strings into plan days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::errors::{AppError, AppResult};
use liftlog::models::ExerciseSet;

/// Parse `100x10` (also `100X10` or `100*10`) into a set
///
/// Only the shape is checked here; range rules are applied by the exercise
/// service so every violation is reported together.
pub fn parse_set(raw: &str) -> AppResult<ExerciseSet> {
    let Some((weight, reps)) = raw.trim().split_once(['x', 'X', '*']) else {
        return Err(AppError::invalid_input(format!(
            "Set '{raw}' must look like WEIGHTxREPS, e.g. 100x10"
        )));
    };
    let weight: f64 = weight.trim().parse().map_err(|_| {
        AppError::invalid_input(format!("Set '{raw}': weight must be a number"))
    })?;
    let reps: u32 = reps.trim().parse().map_err(|_| {
        AppError::invalid_input(format!("Set '{raw}': reps must be a whole number"))
    })?;
    Ok(ExerciseSet::new(weight, reps))
}

/// Parse every `--set` argument, stopping at the first malformed one
pub fn parse_sets(raw: &[String]) -> AppResult<Vec<ExerciseSet>> {
    raw.iter().map(|set| parse_set(set)).collect()
}

/// Parse `Lower=2,5` into a day label and the catalog exercise ids it trains
///
/// A bare label is a day without exercises.
pub fn parse_day(raw: &str) -> AppResult<(String, Vec<i64>)> {
    let (label, ids) = raw.split_once('=').unwrap_or((raw, ""));
    let ids = ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse().map_err(|_| {
                AppError::invalid_input(format!("Day '{raw}': '{id}' is not an exercise id"))
            })
        })
        .collect::<AppResult<Vec<i64>>>()?;
    Ok((label.trim().to_owned(), ids))
}
