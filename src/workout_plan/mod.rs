// ABOUTME: Workout plan port with per-user CRUD over remote and locally stored backends
// ABOUTME: Distinguishes not-found and access-denied failures from port failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP implementation against `/api/v1/users/{id}/workout-plans`
pub mod api;
/// Key-value store implementation
pub mod stored;

pub use api::ApiWorkoutPlans;
pub use stored::StoredWorkoutPlans;

use crate::errors::AppResult;
use crate::models::WorkoutPlan;
use async_trait::async_trait;

/// Store of the workout plans owned by each user
#[async_trait]
pub trait WorkoutPlanApi: Send + Sync {
    /// Every plan of `user_id`
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` when the caller may not read the user's
    /// plans, or a port failure
    async fn list(&self, user_id: &str) -> AppResult<Vec<WorkoutPlan>>;

    /// Plan `plan_id` of `user_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown plan, `PermissionDenied`, or
    /// a port failure
    async fn get(&self, user_id: &str, plan_id: &str) -> AppResult<WorkoutPlan>;

    /// Store a new plan and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied`, or a port failure
    async fn create(&self, user_id: &str, plan: &WorkoutPlan) -> AppResult<WorkoutPlan>;

    /// Replace plan `plan_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown plan, `PermissionDenied`, or
    /// a port failure
    async fn update(&self, user_id: &str, plan_id: &str, plan: &WorkoutPlan)
        -> AppResult<WorkoutPlan>;

    /// Remove plan `plan_id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown plan, `PermissionDenied`, or
    /// a port failure
    async fn delete(&self, user_id: &str, plan_id: &str) -> AppResult<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}
