// ABOUTME: Output formatting helpers for the liftlog CLI
// ABOUTME: Plain-text tables and JSON output for sessions, history, catalog entries and plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::errors::AppResult;
use liftlog::formatters::{format_exercise_for_display, format_volume};
use liftlog::models::{
    CatalogExercise, ExerciseLogEntry, ExerciseStats, MuscleGroup, User, WorkoutPlan,
};
use serde::Serialize;

/// Print `value` as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the signed-in user
pub fn display_user(user: &User) {
    println!("Signed in as {} <{}>", user.username, user.email);
    println!("   Id:   {}", user.id);
    println!("   Role: {}", user.role);
}

/// Display one logged exercise, optionally with its storage key
pub fn display_entry(entry: &ExerciseLogEntry, key: Option<&str>) {
    let display = format_exercise_for_display(entry);
    println!(
        "{}  {}{}",
        display.formatted_timestamp,
        display.exercise_summary,
        if display.failure { "  (to failure)" } else { "" }
    );
    for (index, set) in entry.sets.iter().enumerate() {
        println!(
            "   Set {}: {} x {}",
            index + 1,
            format_volume(set.weight, true),
            set.reps
        );
    }
    println!(
        "   {} sets, {} reps, volume {}, avg {}, max {}, est. 1RM {}",
        display.set_count,
        display.total_reps,
        display.total_volume,
        display.average_weight,
        display.max_weight,
        display.estimated_one_rep_max
    );
    if let Some(key) = key {
        println!("   Key: {key}");
    }
}

/// Display aggregate statistics
pub fn display_stats(stats: &ExerciseStats) {
    println!("Exercises logged: {}", stats.total_exercises);
    println!("Sets logged:      {}", stats.total_sets);
    println!("Total volume:     {}", format_volume(stats.total_volume, true));
}

/// Display muscle groups, one per line
pub fn display_muscle_groups(groups: &[MuscleGroup]) {
    if groups.is_empty() {
        println!("No muscle groups");
        return;
    }
    for group in groups {
        display_muscle_group(group);
    }
}

/// Display one muscle group
pub fn display_muscle_group(group: &MuscleGroup) {
    match &group.description {
        Some(description) => println!("{:>4}  {:<12} {description}", group.id, group.name),
        None => println!("{:>4}  {}", group.id, group.name),
    }
}

/// Display catalog exercises, one per line
pub fn display_exercises(exercises: &[CatalogExercise]) {
    if exercises.is_empty() {
        println!("No exercises");
        return;
    }
    for exercise in exercises {
        display_exercise(exercise);
    }
}

/// Display one catalog exercise
pub fn display_exercise(exercise: &CatalogExercise) {
    println!("{:>4}  {:<24} {}", exercise.id, exercise.name, exercise.group);
}

/// Display plan summaries, one per line
pub fn display_plans(plans: &[WorkoutPlan]) {
    if plans.is_empty() {
        println!("No workout plans");
        return;
    }
    for plan in plans {
        display_plan_summary(plan);
    }
}

fn display_plan_summary(plan: &WorkoutPlan) {
    println!(
        "{:>8}  {:<24} {} {}, {} days{}",
        plan.id.as_deref().unwrap_or("-"),
        plan.name,
        plan.duration,
        plan.duration_unit,
        plan.workout_days.len(),
        if plan.is_active { "  (active)" } else { "" }
    );
}

/// Display a plan with every day and target
pub fn display_plan(plan: &WorkoutPlan) {
    display_plan_summary(plan);
    for day in &plan.workout_days {
        println!("   {}", day.description);
        for target in &day.exercises {
            println!(
                "      {:<24} {} x {}-{}",
                target.exercise.name, target.sets, target.min_reps, target.max_reps
            );
        }
    }
}
