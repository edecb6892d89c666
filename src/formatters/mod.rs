// ABOUTME: Pure formatting of exercise data for storage and display
// ABOUTME: Locale-invariant timestamps, half-up volume rounding, display summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise formatters
//!
//! Timestamps are stored as `DD/MM/YYYY HH:mm:ss` in local time on a 24-hour
//! clock. Normalization to whole seconds is lossy; a stored timestamp
//! re-parses to within one second of the original.
//!
//! All numeric fields of [`ExerciseDisplay`] come from the calculators in
//! `liftlog-intelligence`.

use crate::models::ExerciseLogEntry;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use liftlog_intelligence::ExerciseMetrics;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `chrono` format string of stored and displayed timestamps
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Naive forms accepted in addition to RFC 3339, interpreted as local time
const NAIVE_INPUT_FORMATS: &[&str] = &[
    TIMESTAMP_FORMAT,
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Format a point in time as `DD/MM/YYYY HH:mm:ss` in its own time zone
#[must_use]
pub fn format_timestamp<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp string
///
/// Accepts RFC 3339 (`2025-01-15T10:30:00Z`), the stored
/// `DD/MM/YYYY HH:mm:ss` form, and ISO-like forms without an offset. Naive
/// forms are read as local time. Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }
    NAIVE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// Rewrite a timestamp string into the stored form, in local time
///
/// Unparseable input falls back to the current time instead of failing.
#[must_use]
pub fn normalize_timestamp(raw: &str) -> String {
    let when = parse_timestamp(raw).unwrap_or_else(|| {
        tracing::debug!(timestamp = %raw, "Unparseable timestamp, using current time");
        Local::now()
    });
    format_timestamp(&when)
}

/// Round half-up to one decimal and render with exactly one decimal place
fn round_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

/// Render a volume (or weight) with one decimal, optionally suffixed `" kg"`
///
/// `format_volume(123.45, false) == "123.5"`, `format_volume(0.0, true) == "0.0 kg"`.
#[must_use]
pub fn format_volume(volume: f64, include_unit: bool) -> String {
    let formatted = round_one_decimal(volume);
    if include_unit {
        format!("{formatted} kg")
    } else {
        formatted
    }
}

/// Copy of `entry` with its timestamp normalized for storage
#[must_use]
pub fn format_exercise_for_storage(entry: &ExerciseLogEntry) -> ExerciseLogEntry {
    ExerciseLogEntry {
        timestamp: normalize_timestamp(&entry.timestamp),
        ..entry.clone()
    }
}

/// Display-ready view of one log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDisplay {
    /// `"<group> - <name>"`
    pub exercise_summary: String,
    /// Normalized timestamp
    pub formatted_timestamp: String,
    /// Number of sets
    pub set_count: usize,
    /// Sum of repetitions
    pub total_reps: u64,
    /// Total volume with unit
    pub total_volume: String,
    /// Mean weight with unit
    pub average_weight: String,
    /// Heaviest weight with unit
    pub max_weight: String,
    /// Best estimated one-rep max with unit
    pub estimated_one_rep_max: String,
    /// Whether the last set went to failure
    pub failure: bool,
}

/// Derive the display record of `entry`
#[must_use]
pub fn format_exercise_for_display(entry: &ExerciseLogEntry) -> ExerciseDisplay {
    let metrics = ExerciseMetrics::from_sets(&entry.sets);
    ExerciseDisplay {
        exercise_summary: format!("{} - {}", entry.exercise.group, entry.exercise.name),
        formatted_timestamp: normalize_timestamp(&entry.timestamp),
        set_count: metrics.set_count,
        total_reps: metrics.total_reps,
        total_volume: format_volume(metrics.total_volume, true),
        average_weight: format_volume(metrics.average_weight, true),
        max_weight: format_volume(metrics.max_weight, true),
        estimated_one_rep_max: format_volume(metrics.best_one_rep_max, true),
        failure: entry.failure,
    }
}
