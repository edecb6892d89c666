// ABOUTME: Catalog administration services for exercises and muscle groups
// ABOUTME: Normalizes and validates requests before they reach the catalog port
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::AuthProvider;
use crate::catalog::{ExerciseCatalog, MuscleGroupCatalog};
use crate::constants::messages::ADMIN_REQUIRED;
use crate::errors::{AppError, AppResult};
use crate::models::{CatalogExercise, CatalogExerciseRequest, MuscleGroup, MuscleGroupRequest};
use crate::validation::{validate_catalog_exercise, validate_muscle_group};
use std::sync::Arc;
use tracing::{debug, info};

/// Client-side administrator check for catalogs that do not enforce roles
///
/// Remote catalogs answer 403 themselves; the local catalog relies on this.
#[derive(Clone)]
struct RoleGuard {
    auth: Arc<dyn AuthProvider>,
}

impl RoleGuard {
    async fn require_admin(&self) -> AppResult<()> {
        let session = self.auth.check_auth().await?;
        if session.user.is_admin() {
            Ok(())
        } else {
            debug!(user_id = %session.user.id, "Catalog administration denied");
            Err(AppError::permission_denied(ADMIN_REQUIRED))
        }
    }
}

async fn check_role(guard: Option<&RoleGuard>) -> AppResult<()> {
    match guard {
        Some(guard) => guard.require_admin().await,
        None => Ok(()),
    }
}

/// Trimmed muscle group request with an upper-case name and no blank description
fn normalize_muscle_group(request: &MuscleGroupRequest) -> MuscleGroupRequest {
    MuscleGroupRequest {
        name: request.name.trim().to_uppercase(),
        description: request
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_owned),
    }
}

/// Trimmed catalog exercise request with an upper-case group
fn normalize_exercise(request: &CatalogExerciseRequest) -> CatalogExerciseRequest {
    CatalogExerciseRequest {
        name: request.name.trim().to_owned(),
        group: request.group.trim().to_uppercase(),
    }
}

/// Administration of the catalog exercises
#[derive(Clone)]
pub struct AdminExerciseService {
    catalog: Arc<dyn ExerciseCatalog>,
    guard: Option<RoleGuard>,
}

impl AdminExerciseService {
    /// Create a service over `catalog`
    #[must_use]
    pub fn new(catalog: Arc<dyn ExerciseCatalog>) -> Self {
        Self {
            catalog,
            guard: None,
        }
    }

    /// Require an administrator session from `auth` before admin operations
    #[must_use]
    pub fn with_role_check(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.guard = Some(RoleGuard { auth });
        self
    }

    /// Every catalog exercise
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for non-administrators, or a port failure
    pub async fn get_all(&self) -> AppResult<Vec<CatalogExercise>> {
        check_role(self.guard.as_ref()).await?;
        self.catalog.get_all().await
    }

    /// Catalog exercise `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, `PermissionDenied` for
    /// non-administrators, or a port failure
    pub async fn get_by_id(&self, id: i64) -> AppResult<CatalogExercise> {
        check_role(self.guard.as_ref()).await?;
        self.catalog.get_by_id(id).await
    }

    /// Validate and add an exercise
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without calling the port, or the port's failure
    pub async fn create(&self, request: &CatalogExerciseRequest) -> AppResult<CatalogExercise> {
        let request = normalize_exercise(request);
        validate_catalog_exercise(&request).into_result()?;
        check_role(self.guard.as_ref()).await?;
        let created = self.catalog.create(&request).await?;
        info!(id = created.id, name = %created.name, "Catalog exercise created");
        Ok(created)
    }

    /// Validate and replace exercise `id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without calling the port, or the port's failure
    pub async fn update(&self, id: i64, request: &CatalogExerciseRequest) -> AppResult<CatalogExercise> {
        let request = normalize_exercise(request);
        validate_catalog_exercise(&request).into_result()?;
        check_role(self.guard.as_ref()).await?;
        self.catalog.update(id, &request).await
    }

    /// Remove exercise `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, `PermissionDenied` for
    /// non-administrators, or a port failure
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        check_role(self.guard.as_ref()).await?;
        self.catalog.delete(id).await?;
        info!(id, "Catalog exercise deleted");
        Ok(())
    }

    /// Exercises visible to every user; no administrator needed
    ///
    /// # Errors
    ///
    /// Returns a port failure
    pub async fn list_public(&self) -> AppResult<Vec<CatalogExercise>> {
        self.catalog.list_public().await
    }

    /// One exercise by id, visible to every user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a port failure
    pub async fn get_public_by_id(&self, id: i64) -> AppResult<CatalogExercise> {
        self.catalog.get_public_by_id(id).await
    }
}

/// Administration of the muscle groups
#[derive(Clone)]
pub struct AdminMuscleGroupService {
    catalog: Arc<dyn MuscleGroupCatalog>,
    guard: Option<RoleGuard>,
}

impl AdminMuscleGroupService {
    /// Create a service over `catalog`
    #[must_use]
    pub fn new(catalog: Arc<dyn MuscleGroupCatalog>) -> Self {
        Self {
            catalog,
            guard: None,
        }
    }

    /// Require an administrator session from `auth` before admin operations
    #[must_use]
    pub fn with_role_check(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.guard = Some(RoleGuard { auth });
        self
    }

    /// Every muscle group
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for non-administrators, or a port failure
    pub async fn get_all(&self) -> AppResult<Vec<MuscleGroup>> {
        check_role(self.guard.as_ref()).await?;
        self.catalog.get_all().await
    }

    /// Muscle group `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, `PermissionDenied` for
    /// non-administrators, or a port failure
    pub async fn get_by_id(&self, id: i64) -> AppResult<MuscleGroup> {
        check_role(self.guard.as_ref()).await?;
        self.catalog.get_by_id(id).await
    }

    /// Muscle group named `name` (case-insensitive); no administrator needed
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown name, or a port failure
    pub async fn get_by_name(&self, name: &str) -> AppResult<MuscleGroup> {
        self.catalog.get_by_name(name).await
    }

    /// Validate and add a muscle group; the name is stored upper case
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without calling the port, a conflict when the
    /// name is taken, or another port failure
    pub async fn create(&self, request: &MuscleGroupRequest) -> AppResult<MuscleGroup> {
        let request = normalize_muscle_group(request);
        validate_muscle_group(&request).into_result()?;
        check_role(self.guard.as_ref()).await?;
        let created = self.catalog.create(&request).await?;
        info!(id = created.id, name = %created.name, "Muscle group created");
        Ok(created)
    }

    /// Validate and replace muscle group `id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without calling the port, a conflict when the
    /// name is taken by another group, or another port failure
    pub async fn update(&self, id: i64, request: &MuscleGroupRequest) -> AppResult<MuscleGroup> {
        let request = normalize_muscle_group(request);
        validate_muscle_group(&request).into_result()?;
        check_role(self.guard.as_ref()).await?;
        self.catalog.update(id, &request).await
    }

    /// Remove muscle group `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceConflict` while exercises reference the group,
    /// `ResourceNotFound` for an unknown id, or another port failure
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        check_role(self.guard.as_ref()).await?;
        self.catalog.delete(id).await?;
        info!(id, "Muscle group deleted");
        Ok(())
    }
}
