// ABOUTME: Workout plan service acting for the signed-in user over the workout plan port
// ABOUTME: Validates plans before any write and prefixes port failures per operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::wrap_port_failure;
use crate::constants::messages::{DELETE_PLAN_FAILED, LOAD_PLANS_FAILED, SAVE_PLAN_FAILED};
use crate::errors::{AppError, AppResult};
use crate::models::{User, WorkoutPlan};
use crate::validation::validate_workout_plan;
use crate::workout_plan::WorkoutPlanApi;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Workout plans of the current user
pub struct WorkoutPlanService {
    plans: Arc<dyn WorkoutPlanApi>,
    current_user: RwLock<Option<User>>,
}

impl WorkoutPlanService {
    /// Create a service with nobody signed in
    #[must_use]
    pub fn new(plans: Arc<dyn WorkoutPlanApi>) -> Self {
        Self {
            plans,
            current_user: RwLock::new(None),
        }
    }

    /// Backend serving the plans
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.plans.backend_name()
    }

    /// Replace the signed-in identity; `None` after logout
    pub async fn set_current_user(&self, user: Option<User>) {
        *self.current_user.write().await = user;
    }

    async fn user_id(&self) -> AppResult<String> {
        self.current_user
            .read()
            .await
            .as_ref()
            .map(|u| u.id.clone())
            .ok_or_else(AppError::auth_required)
    }

    /// Every plan of the signed-in user
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when nobody is signed in, or
    /// "Failed to load workout plans: ..." on a port failure
    pub async fn list_plans(&self) -> AppResult<Vec<WorkoutPlan>> {
        let user_id = self.user_id().await?;
        self.plans
            .list(&user_id)
            .await
            .map_err(|e| wrap_port_failure(e, LOAD_PLANS_FAILED))
    }

    /// Plan `plan_id`
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired`, `ResourceNotFound`, `PermissionDenied`, or a
    /// prefixed port failure
    pub async fn get_plan(&self, plan_id: &str) -> AppResult<WorkoutPlan> {
        let user_id = self.user_id().await?;
        self.plans
            .get(&user_id, plan_id)
            .await
            .map_err(|e| wrap_port_failure(e, LOAD_PLANS_FAILED))
    }

    /// The plan marked active, if any
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_plans`]
    pub async fn active_plan(&self) -> AppResult<Option<WorkoutPlan>> {
        Ok(self.list_plans().await?.into_iter().find(|p| p.is_active))
    }

    /// Validate and store a new plan
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` "Validation failed: ..." without calling the
    /// port, `AuthRequired`, or "Failed to save workout plan: ..."
    pub async fn create_plan(&self, plan: &WorkoutPlan) -> AppResult<WorkoutPlan> {
        validate_workout_plan(plan).into_result()?;
        let user_id = self.user_id().await?;
        let created = self
            .plans
            .create(&user_id, plan)
            .await
            .map_err(|e| wrap_port_failure(e, SAVE_PLAN_FAILED))?;
        info!(plan_id = created.id.as_deref(), name = %created.name, "Workout plan created");
        Ok(created)
    }

    /// Validate and replace plan `plan_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without calling the port, `AuthRequired`,
    /// `ResourceNotFound`, `PermissionDenied`, or a prefixed port failure
    pub async fn update_plan(&self, plan_id: &str, plan: &WorkoutPlan) -> AppResult<WorkoutPlan> {
        validate_workout_plan(plan).into_result()?;
        let user_id = self.user_id().await?;
        self.plans
            .update(&user_id, plan_id, plan)
            .await
            .map_err(|e| wrap_port_failure(e, SAVE_PLAN_FAILED))
    }

    /// Remove plan `plan_id`
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired`, `ResourceNotFound`, `PermissionDenied`, or
    /// "Failed to delete workout plan: ..."
    pub async fn delete_plan(&self, plan_id: &str) -> AppResult<()> {
        let user_id = self.user_id().await?;
        self.plans
            .delete(&user_id, plan_id)
            .await
            .map_err(|e| wrap_port_failure(e, DELETE_PLAN_FAILED))?;
        debug!(plan_id, "Workout plan deleted");
        Ok(())
    }
}
