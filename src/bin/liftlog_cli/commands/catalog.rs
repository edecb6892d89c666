// ABOUTME: Catalog administration commands for the liftlog CLI
// ABOUTME: Muscle group and catalog exercise CRUD through the admin services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::context::ServiceContext;
use liftlog::errors::AppResult;
use liftlog::models::{CatalogExerciseRequest, MuscleGroupRequest};

use crate::helpers::display::{
    display_exercise, display_exercises, display_muscle_group, display_muscle_groups, print_json,
};

pub async fn list_groups(context: &ServiceContext, json: bool) -> AppResult<()> {
    let groups = context.admin_muscle_groups().get_all().await?;
    if json {
        return print_json(&groups);
    }
    display_muscle_groups(&groups);
    Ok(())
}

pub async fn show_group(context: &ServiceContext, name: &str, json: bool) -> AppResult<()> {
    let group = context.admin_muscle_groups().get_by_name(name).await?;
    if json {
        return print_json(&group);
    }
    display_muscle_group(&group);
    Ok(())
}

pub async fn create_group(
    context: &ServiceContext,
    name: String,
    description: Option<String>,
    json: bool,
) -> AppResult<()> {
    let group = context
        .admin_muscle_groups()
        .create(&MuscleGroupRequest::new(name, description))
        .await?;
    if json {
        return print_json(&group);
    }
    print!("Created ");
    display_muscle_group(&group);
    Ok(())
}

pub async fn update_group(
    context: &ServiceContext,
    id: i64,
    name: String,
    description: Option<String>,
    json: bool,
) -> AppResult<()> {
    let group = context
        .admin_muscle_groups()
        .update(id, &MuscleGroupRequest::new(name, description))
        .await?;
    if json {
        return print_json(&group);
    }
    print!("Updated ");
    display_muscle_group(&group);
    Ok(())
}

pub async fn delete_group(context: &ServiceContext, id: i64) -> AppResult<()> {
    context.admin_muscle_groups().delete(id).await?;
    println!("Deleted muscle group {id}");
    Ok(())
}

/// List catalog exercises; `admin` selects the guarded listing
pub async fn list_exercises(context: &ServiceContext, admin: bool, json: bool) -> AppResult<()> {
    let service = context.admin_exercises();
    let exercises = if admin {
        service.get_all().await?
    } else {
        service.list_public().await?
    };
    if json {
        return print_json(&exercises);
    }
    display_exercises(&exercises);
    Ok(())
}

/// Look one exercise up in the public catalog
pub async fn show_exercise(context: &ServiceContext, id: i64, json: bool) -> AppResult<()> {
    let exercise = context.admin_exercises().get_public_by_id(id).await?;
    if json {
        return print_json(&exercise);
    }
    display_exercise(&exercise);
    Ok(())
}

pub async fn create_exercise(
    context: &ServiceContext,
    name: String,
    group: String,
    json: bool,
) -> AppResult<()> {
    let exercise = context
        .admin_exercises()
        .create(&CatalogExerciseRequest::new(name, group))
        .await?;
    if json {
        return print_json(&exercise);
    }
    print!("Created ");
    display_exercise(&exercise);
    Ok(())
}

pub async fn update_exercise(
    context: &ServiceContext,
    id: i64,
    name: String,
    group: String,
    json: bool,
) -> AppResult<()> {
    let exercise = context
        .admin_exercises()
        .update(id, &CatalogExerciseRequest::new(name, group))
        .await?;
    if json {
        return print_json(&exercise);
    }
    print!("Updated ");
    display_exercise(&exercise);
    Ok(())
}

pub async fn delete_exercise(context: &ServiceContext, id: i64) -> AppResult<()> {
    context.admin_exercises().delete(id).await?;
    println!("Deleted exercise {id}");
    Ok(())
}
