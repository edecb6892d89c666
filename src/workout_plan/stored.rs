// ABOUTME: Workout plans kept in the key-value store, one record per user
// ABOUTME: Assigns plan and day ids locally and reports unknown ids as not found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WorkoutPlanApi;
use crate::constants::storage_keys::WORKOUT_PLANS_PREFIX;
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutPlan;
use crate::storage::{load_json, save_json, StorageProvider};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Plans stored under `workout_plans_<user_id>` as one JSON list
pub struct StoredWorkoutPlans {
    storage: Arc<dyn StorageProvider>,
    // Serializes read-modify-write of a user's list
    write_lock: Mutex<()>,
}

fn plans_key(user_id: &str) -> String {
    format!("{WORKOUT_PLANS_PREFIX}{user_id}")
}

fn missing(plan_id: &str) -> AppError {
    AppError::not_found("Workout plan").with_resource_id(plan_id)
}

/// Copy of `plan` carrying `plan_id` on itself and on every day
fn with_ids(plan: &WorkoutPlan, plan_id: &str) -> WorkoutPlan {
    let mut stored = plan.clone();
    stored.id = Some(plan_id.to_owned());
    for day in &mut stored.workout_days {
        if day.id.is_none() {
            day.id = Some(Uuid::new_v4().to_string());
        }
        day.workout_plan_id = Some(plan_id.to_owned());
    }
    stored
}

impl StoredWorkoutPlans {
    /// Create a backend over `storage`
    #[must_use]
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    async fn load_all(&self, user_id: &str) -> AppResult<Vec<WorkoutPlan>> {
        Ok(load_json(self.storage.as_ref(), &plans_key(user_id))
            .await?
            .unwrap_or_default())
    }

    async fn save_all(&self, user_id: &str, plans: &[WorkoutPlan]) -> AppResult<()> {
        save_json(self.storage.as_ref(), &plans_key(user_id), plans).await
    }
}

#[async_trait]
impl WorkoutPlanApi for StoredWorkoutPlans {
    async fn list(&self, user_id: &str) -> AppResult<Vec<WorkoutPlan>> {
        self.load_all(user_id).await
    }

    async fn get(&self, user_id: &str, plan_id: &str) -> AppResult<WorkoutPlan> {
        self.load_all(user_id)
            .await?
            .into_iter()
            .find(|p| p.id.as_deref() == Some(plan_id))
            .ok_or_else(|| missing(plan_id))
    }

    async fn create(&self, user_id: &str, plan: &WorkoutPlan) -> AppResult<WorkoutPlan> {
        let _guard = self.write_lock.lock().await;
        let mut plans = self.load_all(user_id).await?;
        let created = with_ids(plan, &Uuid::new_v4().to_string());
        plans.push(created.clone());
        self.save_all(user_id, &plans).await?;
        debug!(user_id, plan_id = created.id.as_deref(), "Stored workout plan");
        Ok(created)
    }

    async fn update(
        &self,
        user_id: &str,
        plan_id: &str,
        plan: &WorkoutPlan,
    ) -> AppResult<WorkoutPlan> {
        let _guard = self.write_lock.lock().await;
        let mut plans = self.load_all(user_id).await?;
        let slot = plans
            .iter_mut()
            .find(|p| p.id.as_deref() == Some(plan_id))
            .ok_or_else(|| missing(plan_id))?;
        *slot = with_ids(plan, plan_id);
        let updated = slot.clone();
        self.save_all(user_id, &plans).await?;
        Ok(updated)
    }

    async fn delete(&self, user_id: &str, plan_id: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut plans = self.load_all(user_id).await?;
        let before = plans.len();
        plans.retain(|p| p.id.as_deref() != Some(plan_id));
        if plans.len() == before {
            return Err(missing(plan_id));
        }
        self.save_all(user_id, &plans).await
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}
