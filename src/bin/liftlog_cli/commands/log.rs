// ABOUTME: Exercise log commands for the liftlog CLI
// ABOUTME: log, history, stats, latest, delete and clear through the exercise service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use liftlog::context::ServiceContext;
use liftlog::errors::AppResult;
use liftlog::models::{Exercise, ExerciseLogEntry};

use crate::helpers::display::{display_entry, display_stats, print_json};
use crate::helpers::parse::parse_sets;

/// Log one exercise
pub async fn record(
    context: &ServiceContext,
    group: String,
    name: String,
    sets: &[String],
    failure: bool,
    timestamp: Option<String>,
) -> AppResult<()> {
    let entry = ExerciseLogEntry {
        timestamp: timestamp.unwrap_or_else(|| Utc::now().to_rfc3339()),
        exercise: Exercise::new(group, name),
        sets: parse_sets(sets)?,
        failure,
    };
    context.exercises().save_exercise(&entry).await?;
    println!(
        "Saved {} - {} ({} sets)",
        entry.exercise.group,
        entry.exercise.name,
        entry.sets.len()
    );
    Ok(())
}

/// Show every logged exercise
///
/// Local history is listed with storage keys so entries can be deleted.
pub async fn history(context: &ServiceContext, json: bool) -> AppResult<()> {
    let exercises = context.exercises();
    let remote = exercises.has_remote() && exercises.current_user().await.is_some();

    if remote {
        let entries = exercises.load_exercises().await;
        if json {
            return print_json(&entries);
        }
        if entries.is_empty() {
            println!("No exercises logged");
        }
        for entry in &entries {
            display_entry(entry, None);
        }
        return Ok(());
    }

    let records = exercises.stored_exercises().await?;
    if json {
        return print_json(&records);
    }
    if records.is_empty() {
        println!("No exercises logged");
    }
    for record in &records {
        display_entry(&record.entry, Some(&record.key));
    }
    Ok(())
}

/// Show totals over the history
pub async fn stats(context: &ServiceContext, json: bool) -> AppResult<()> {
    let stats = context.exercises().get_exercise_stats().await;
    if json {
        return print_json(&stats);
    }
    display_stats(&stats);
    Ok(())
}

/// Show the latest remote log of catalog exercise `exercise_id`
pub async fn latest(context: &ServiceContext, exercise_id: i64, json: bool) -> AppResult<()> {
    let latest = context.exercises().get_latest_log(exercise_id).await?;
    if json {
        return print_json(&latest);
    }
    match latest {
        Some(entry) => display_entry(&entry, None),
        None => println!("No previous log for exercise {exercise_id}"),
    }
    Ok(())
}

/// Delete one locally stored exercise
pub async fn delete(context: &ServiceContext, key: &str) -> AppResult<()> {
    context.exercises().delete_exercise(key).await?;
    println!("Deleted {key}");
    Ok(())
}

/// Delete every locally stored exercise
pub async fn clear(context: &ServiceContext) -> AppResult<()> {
    context.exercises().clear_all_exercises().await?;
    println!("Exercise history cleared");
    Ok(())
}
