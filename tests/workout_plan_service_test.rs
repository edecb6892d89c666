// ABOUTME: Integration tests for the workout plan service over the stored plan backend
// ABOUTME: Covers the signed-in requirement, validation gating, active plan and failure prefixes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{FailingStorage, RecordingStorage};
use liftlog::errors::ErrorCode;
use liftlog::models::{User, UserRole};
use liftlog::services::WorkoutPlanService;
use liftlog::storage::memory::InMemoryStorage;
use liftlog::storage::StorageProvider;
use liftlog::workout_plan::StoredWorkoutPlans;
use std::sync::Arc;

fn lifter(id: &str) -> User {
    User {
        id: id.to_owned(),
        username: "lifter".to_owned(),
        email: format!("{id}@example.com"),
        role: UserRole::User,
    }
}

async fn signed_in_service(storage: Arc<dyn StorageProvider>) -> WorkoutPlanService {
    common::init_test_logging();
    let service = WorkoutPlanService::new(Arc::new(StoredWorkoutPlans::new(storage)));
    service.set_current_user(Some(lifter("user_1"))).await;
    service
}

#[tokio::test]
async fn test_plan_lifecycle_for_signed_in_user() {
    let service = signed_in_service(Arc::new(InMemoryStorage::new())).await;
    assert_eq!(service.backend_name(), "local");

    let created = service
        .create_plan(&common::strength_plan("Strength"))
        .await
        .unwrap();
    let id = created.id.clone().unwrap();
    assert_eq!(service.list_plans().await.unwrap(), vec![created.clone()]);
    assert_eq!(service.active_plan().await.unwrap(), None);

    let mut active = created;
    active.is_active = true;
    active.workout_days[0].exercises[0].max_reps = 15;
    service.update_plan(&id, &active).await.unwrap();

    let current = service.active_plan().await.unwrap().unwrap();
    assert_eq!(current.id.as_deref(), Some(id.as_str()));
    assert_eq!(current.workout_days[0].exercises[0].max_reps, 15);

    service.delete_plan(&id).await.unwrap();
    assert!(service.get_plan(&id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_signed_out_caller_is_rejected() {
    let service = signed_in_service(Arc::new(InMemoryStorage::new())).await;
    service.set_current_user(None).await;

    assert_eq!(
        service.list_plans().await.unwrap_err().code,
        ErrorCode::AuthRequired
    );
    assert_eq!(
        service
            .create_plan(&common::strength_plan("Strength"))
            .await
            .unwrap_err()
            .code,
        ErrorCode::AuthRequired
    );
}

#[tokio::test]
async fn test_invalid_plan_never_reaches_storage() {
    let storage = Arc::new(RecordingStorage::new());
    let service = signed_in_service(Arc::clone(&storage) as _).await;

    let mut plan = common::strength_plan("  ");
    plan.workout_days[0].exercises[0].min_reps = 10;
    plan.workout_days[0].exercises[0].max_reps = 5;
    let error = service.create_plan(&plan).await.unwrap_err();

    assert!(error.is_validation());
    assert!(error.message.starts_with("Validation failed: "));
    assert!(error.message.contains("Plan name is required"));
    assert!(error.message.contains("lower than minimum reps"));
    assert_eq!(storage.save_count(), 0);

    let update_error = service.update_plan("any", &plan).await.unwrap_err();
    assert!(update_error.is_validation());
    assert_eq!(storage.save_count(), 0);
}

#[tokio::test]
async fn test_plans_are_scoped_to_the_current_user() {
    let storage: Arc<dyn StorageProvider> = Arc::new(InMemoryStorage::new());
    let service = signed_in_service(Arc::clone(&storage)).await;
    let id = service
        .create_plan(&common::strength_plan("Strength"))
        .await
        .unwrap()
        .id
        .unwrap();

    service.set_current_user(Some(lifter("user_2"))).await;
    assert!(service.list_plans().await.unwrap().is_empty());
    assert!(service.delete_plan(&id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_port_failures_are_prefixed_per_operation() {
    let service = signed_in_service(Arc::new(FailingStorage)).await;

    let load = service.list_plans().await.unwrap_err();
    assert_eq!(load.code, ErrorCode::StorageError);
    assert_eq!(load.message, "Failed to load workout plans: disk unavailable");

    let save = service
        .create_plan(&common::strength_plan("Strength"))
        .await
        .unwrap_err();
    assert_eq!(save.message, "Failed to save workout plan: disk unavailable");

    let delete = service.delete_plan("plan_1").await.unwrap_err();
    assert_eq!(delete.message, "Failed to delete workout plan: disk unavailable");
}
