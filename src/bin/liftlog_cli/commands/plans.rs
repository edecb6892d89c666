// ABOUTME: Workout plan commands for the liftlog CLI
// ABOUTME: Lists, shows, creates, activates and deletes the signed-in user's plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::context::ServiceContext;
use liftlog::errors::{AppError, AppResult};
use liftlog::models::{DurationUnit, ExerciseTarget, TargetExercise, WorkoutDay, WorkoutPlan};

use crate::helpers::display::{display_plan, display_plans, print_json};
use crate::helpers::parse::parse_day;

pub async fn list(context: &ServiceContext, json: bool) -> AppResult<()> {
    let plans = context.plans().list_plans().await?;
    if json {
        return print_json(&plans);
    }
    display_plans(&plans);
    Ok(())
}

pub async fn show(context: &ServiceContext, plan_id: &str, json: bool) -> AppResult<()> {
    let plan = context.plans().get_plan(plan_id).await?;
    if json {
        return print_json(&plan);
    }
    display_plan(&plan);
    Ok(())
}

pub async fn active(context: &ServiceContext, json: bool) -> AppResult<()> {
    let plan = context.plans().active_plan().await?;
    if json {
        return print_json(&plan);
    }
    match plan {
        Some(plan) => display_plan(&plan),
        None => println!("No active workout plan"),
    }
    Ok(())
}

/// Resolve `DAY=ID,ID` arguments against the public catalog
async fn build_days(context: &ServiceContext, days: &[String]) -> AppResult<Vec<WorkoutDay>> {
    let mut built = Vec::with_capacity(days.len());
    for raw in days {
        let (description, ids) = parse_day(raw)?;
        let mut exercises = Vec::with_capacity(ids.len());
        for id in ids {
            let exercise = context.admin_exercises().get_public_by_id(id).await?;
            exercises.push(ExerciseTarget::new(TargetExercise {
                id: exercise.id.to_string(),
                name: exercise.name,
                group: exercise.group,
            }));
        }
        built.push(WorkoutDay {
            id: None,
            description,
            workout_plan_id: None,
            exercises,
        });
    }
    Ok(built)
}

pub async fn create(
    context: &ServiceContext,
    name: String,
    duration: u32,
    unit: &str,
    days: &[String],
    activate: bool,
    json: bool,
) -> AppResult<()> {
    let unit = DurationUnit::parse(unit).ok_or_else(|| {
        AppError::invalid_input(format!("Unknown duration unit '{unit}', use weeks or months"))
    })?;
    let mut plan = WorkoutPlan::new(name, duration, unit);
    plan.is_active = activate;
    plan.workout_days = build_days(context, days).await?;

    let created = context.plans().create_plan(&plan).await?;
    if json {
        return print_json(&created);
    }
    print!("Created ");
    display_plan(&created);
    Ok(())
}

/// Mark `plan_id` active and every other plan inactive
pub async fn activate(context: &ServiceContext, plan_id: &str, json: bool) -> AppResult<()> {
    let service = context.plans();
    let plans = service.list_plans().await?;
    if !plans.iter().any(|p| p.id.as_deref() == Some(plan_id)) {
        return Err(AppError::not_found("Workout plan").with_resource_id(plan_id));
    }

    let mut activated = None;
    for mut plan in plans {
        let Some(id) = plan.id.clone() else { continue };
        let wanted = id == plan_id;
        if plan.is_active == wanted {
            if wanted {
                activated = Some(plan);
            }
            continue;
        }
        plan.is_active = wanted;
        let updated = service.update_plan(&id, &plan).await?;
        if wanted {
            activated = Some(updated);
        }
    }

    if json {
        return print_json(&activated);
    }
    if let Some(plan) = activated {
        print!("Activated ");
        display_plan(&plan);
    }
    Ok(())
}

pub async fn delete(context: &ServiceContext, plan_id: &str) -> AppResult<()> {
    context.plans().delete_plan(plan_id).await?;
    println!("Deleted workout plan {plan_id}");
    Ok(())
}
