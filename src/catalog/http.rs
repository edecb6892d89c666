// ABOUTME: HTTP catalog backends against the admin exercise and muscle-group endpoints
// ABOUTME: Maps 401/403/404/409 to distinct AppError codes with readable messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ExerciseCatalog, MuscleGroupCatalog};
use crate::auth::{require_token, AuthProvider};
use crate::constants::api_paths::{ADMIN_EXERCISES, ADMIN_MUSCLE_GROUPS, EXERCISES, MUSCLE_GROUPS};
use crate::constants::messages::ADMIN_REQUIRED;
use crate::errors::{AppError, AppResult};
use crate::http_client::{encode_path, ApiClient, ApiResponse};
use crate::models::{CatalogExercise, CatalogExerciseRequest, MuscleGroup, MuscleGroupRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Entity names used in error messages
#[derive(Debug, Clone, Copy)]
enum Entity {
    Exercise,
    MuscleGroup,
}

impl Entity {
    const fn label(self) -> &'static str {
        match self {
            Self::Exercise => "Exercise",
            Self::MuscleGroup => "Muscle group",
        }
    }

    const fn conflict_default(self) -> &'static str {
        match self {
            Self::Exercise => "Conflict: exercise already exists or is still referenced",
            Self::MuscleGroup => "Conflict: muscle group already exists or is still referenced",
        }
    }
}

/// Translate a non-2xx catalog response
fn status_error(response: &ApiResponse, entity: Entity) -> AppError {
    let status = response.status_code();
    let error = match response.status {
        StatusCode::UNAUTHORIZED => AppError::auth_required(),
        StatusCode::FORBIDDEN => AppError::permission_denied(ADMIN_REQUIRED),
        StatusCode::NOT_FOUND => AppError::not_found(entity.label()),
        StatusCode::CONFLICT => AppError::conflict(
            response
                .error_field(&["error", "message"])
                .unwrap_or_else(|| entity.conflict_default().to_owned()),
        ),
        _ => AppError::external_service(format!("Server error: {status}")),
    };
    error.with_http_status(status)
}

fn decode<T: DeserializeOwned>(response: &ApiResponse, entity: Entity) -> AppResult<T> {
    if response.is_success() {
        response.json()
    } else {
        Err(status_error(response, entity))
    }
}

fn expect_empty(response: &ApiResponse, entity: Entity) -> AppResult<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(status_error(response, entity))
    }
}

/// Authenticated JSON calls shared by both catalogs
struct AdminEndpoint {
    client: ApiClient,
    auth: Arc<dyn AuthProvider>,
    base_path: &'static str,
    entity: Entity,
}

impl AdminEndpoint {
    fn item(&self, id: i64) -> String {
        format!("{}/{id}", self.base_path)
    }

    async fn list<T: DeserializeOwned>(&self) -> AppResult<Vec<T>> {
        let token = require_token(self.auth.as_ref()).await?;
        let response = self.client.get(self.base_path, Some(token.as_str())).await?;
        decode(&response, self.entity)
    }

    async fn fetch<T: DeserializeOwned>(&self, id: i64) -> AppResult<T> {
        let token = require_token(self.auth.as_ref()).await?;
        let response = self.client.get(&self.item(id), Some(token.as_str())).await?;
        decode(&response, self.entity)
    }

    async fn create<B, T>(&self, body: &B) -> AppResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let token = require_token(self.auth.as_ref()).await?;
        let response = self
            .client
            .post(self.base_path, Some(token.as_str()), body)
            .await?;
        decode(&response, self.entity)
    }

    async fn update<B, T>(&self, id: i64, body: &B) -> AppResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let token = require_token(self.auth.as_ref()).await?;
        let response = self
            .client
            .put(&self.item(id), Some(token.as_str()), body)
            .await?;
        decode(&response, self.entity)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let token = require_token(self.auth.as_ref()).await?;
        let response = self.client.delete(&self.item(id), Some(token.as_str())).await?;
        expect_empty(&response, self.entity)
    }
}

/// Exercise catalog served by the admin API
pub struct HttpExerciseCatalog {
    endpoint: AdminEndpoint,
}

impl HttpExerciseCatalog {
    /// Create a catalog client authenticating with the token held by `auth`
    #[must_use]
    pub fn new(client: ApiClient, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            endpoint: AdminEndpoint {
                client,
                auth,
                base_path: ADMIN_EXERCISES,
                entity: Entity::Exercise,
            },
        }
    }
}

#[async_trait]
impl ExerciseCatalog for HttpExerciseCatalog {
    async fn get_all(&self) -> AppResult<Vec<CatalogExercise>> {
        self.endpoint.list().await
    }

    async fn get_by_id(&self, id: i64) -> AppResult<CatalogExercise> {
        self.endpoint.fetch(id).await
    }

    async fn create(&self, request: &CatalogExerciseRequest) -> AppResult<CatalogExercise> {
        self.endpoint.create(request).await
    }

    async fn update(&self, id: i64, request: &CatalogExerciseRequest) -> AppResult<CatalogExercise> {
        self.endpoint.update(id, request).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.endpoint.delete(id).await
    }

    async fn list_public(&self) -> AppResult<Vec<CatalogExercise>> {
        let response = self.endpoint.client.get(EXERCISES, None).await?;
        decode(&response, Entity::Exercise)
    }

    async fn get_public_by_id(&self, id: i64) -> AppResult<CatalogExercise> {
        let response = self
            .endpoint
            .client
            .get(&format!("{EXERCISES}/{id}"), None)
            .await?;
        decode(&response, Entity::Exercise)
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}

/// Muscle groups served by the admin API
pub struct HttpMuscleGroupCatalog {
    endpoint: AdminEndpoint,
}

impl HttpMuscleGroupCatalog {
    /// Create a catalog client authenticating with the token held by `auth`
    #[must_use]
    pub fn new(client: ApiClient, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            endpoint: AdminEndpoint {
                client,
                auth,
                base_path: ADMIN_MUSCLE_GROUPS,
                entity: Entity::MuscleGroup,
            },
        }
    }
}

#[async_trait]
impl MuscleGroupCatalog for HttpMuscleGroupCatalog {
    async fn get_all(&self) -> AppResult<Vec<MuscleGroup>> {
        self.endpoint.list().await
    }

    async fn get_by_id(&self, id: i64) -> AppResult<MuscleGroup> {
        self.endpoint.fetch(id).await
    }

    async fn get_by_name(&self, name: &str) -> AppResult<MuscleGroup> {
        // Public lookup; no token needed
        let path = encode_path(MUSCLE_GROUPS, &["by-name", name.trim()])?;
        let response = self.endpoint.client.get(&path, None).await?;
        decode(&response, Entity::MuscleGroup)
    }

    async fn create(&self, request: &MuscleGroupRequest) -> AppResult<MuscleGroup> {
        self.endpoint.create(request).await
    }

    async fn update(&self, id: i64, request: &MuscleGroupRequest) -> AppResult<MuscleGroup> {
        self.endpoint.update(id, request).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.endpoint.delete(id).await
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}
