// ABOUTME: HTTP workout plan adapter for /api/v1/users/{id}/workout-plans
// ABOUTME: Maps 401/403/404 to auth, access-denied and not-found errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WorkoutPlanApi;
use crate::auth::{require_token, AuthProvider};
use crate::constants::api_paths::{USERS, WORKOUT_PLANS};
use crate::constants::messages::ACCESS_DENIED;
use crate::errors::{AppError, AppResult};
use crate::http_client::{encode_path, ApiClient, ApiResponse};
use crate::models::WorkoutPlan;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Workout plans stored on the remote backend
pub struct ApiWorkoutPlans {
    client: ApiClient,
    auth: Arc<dyn AuthProvider>,
}

impl ApiWorkoutPlans {
    /// Create an adapter authenticating with the token held by `auth`
    #[must_use]
    pub fn new(client: ApiClient, auth: Arc<dyn AuthProvider>) -> Self {
        Self { client, auth }
    }

    async fn token(&self) -> AppResult<String> {
        require_token(self.auth.as_ref()).await
    }
}

fn plans_path(user_id: &str) -> AppResult<String> {
    encode_path(USERS, &[user_id, WORKOUT_PLANS])
}

fn plan_path(user_id: &str, plan_id: &str) -> AppResult<String> {
    encode_path(USERS, &[user_id, WORKOUT_PLANS, plan_id])
}

fn plan_error(response: &ApiResponse) -> AppError {
    let status = response.status_code();
    let error = match response.status {
        StatusCode::UNAUTHORIZED => AppError::auth_required(),
        StatusCode::FORBIDDEN => AppError::permission_denied(ACCESS_DENIED),
        StatusCode::NOT_FOUND => AppError::not_found("Workout plan"),
        _ => AppError::external_service(format!("Server error: {status}")),
    };
    error.with_http_status(status)
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> AppResult<T> {
    if response.is_success() {
        response.json()
    } else {
        Err(plan_error(response))
    }
}

#[async_trait]
impl WorkoutPlanApi for ApiWorkoutPlans {
    async fn list(&self, user_id: &str) -> AppResult<Vec<WorkoutPlan>> {
        let token = self.token().await?;
        let response = self
            .client
            .get(&plans_path(user_id)?, Some(token.as_str()))
            .await?;
        decode(&response)
    }

    async fn get(&self, user_id: &str, plan_id: &str) -> AppResult<WorkoutPlan> {
        let token = self.token().await?;
        let response = self
            .client
            .get(&plan_path(user_id, plan_id)?, Some(token.as_str()))
            .await?;
        decode(&response)
    }

    async fn create(&self, user_id: &str, plan: &WorkoutPlan) -> AppResult<WorkoutPlan> {
        let token = self.token().await?;
        let response = self
            .client
            .post(&plans_path(user_id)?, Some(token.as_str()), plan)
            .await?;
        decode(&response)
    }

    async fn update(
        &self,
        user_id: &str,
        plan_id: &str,
        plan: &WorkoutPlan,
    ) -> AppResult<WorkoutPlan> {
        let token = self.token().await?;
        let response = self
            .client
            .put(&plan_path(user_id, plan_id)?, Some(token.as_str()), plan)
            .await?;
        decode(&response)
    }

    async fn delete(&self, user_id: &str, plan_id: &str) -> AppResult<()> {
        let token = self.token().await?;
        let response = self
            .client
            .delete(&plan_path(user_id, plan_id)?, Some(token.as_str()))
            .await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(plan_error(&response))
        }
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}
