// ABOUTME: Reference catalog ports for catalog exercises and muscle groups
// ABOUTME: Admin CRUD contracts shared by the local and HTTP backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog Ports
//!
//! Failures are reported with distinct error codes so callers can tell them
//! apart without reading messages:
//!
//! - `PermissionDenied` when the signed-in user is not an administrator
//! - `ResourceNotFound` for an unknown id or name
//! - `ResourceConflict` / `ResourceAlreadyExists` for duplicate names and for
//!   deleting a muscle group that exercises still reference

/// HTTP backends against the admin API
pub mod http;
/// In-process seeded backend
pub mod local;

pub use http::{HttpExerciseCatalog, HttpMuscleGroupCatalog};
pub use local::LocalCatalog;

use crate::errors::AppResult;
use crate::models::{CatalogExercise, CatalogExerciseRequest, MuscleGroup, MuscleGroupRequest};
use async_trait::async_trait;

/// Catalog of exercises that can be logged
#[async_trait]
pub trait ExerciseCatalog: Send + Sync {
    /// Every catalog exercise (admin view)
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for non-administrators, or a port failure
    async fn get_all(&self) -> AppResult<Vec<CatalogExercise>>;

    /// Catalog exercise `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a port failure
    async fn get_by_id(&self, id: i64) -> AppResult<CatalogExercise>;

    /// Add an exercise
    ///
    /// # Errors
    ///
    /// Returns a conflict for a duplicate name, `ResourceNotFound` for an
    /// unknown muscle group, or a port failure
    async fn create(&self, request: &CatalogExerciseRequest) -> AppResult<CatalogExercise>;

    /// Replace exercise `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id or group, a conflict for a
    /// duplicate name, or a port failure
    async fn update(&self, id: i64, request: &CatalogExerciseRequest)
        -> AppResult<CatalogExercise>;

    /// Remove exercise `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a port failure
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Exercises any signed-in or anonymous user may browse
    ///
    /// # Errors
    ///
    /// Returns a port failure
    async fn list_public(&self) -> AppResult<Vec<CatalogExercise>>;

    /// Public view of exercise `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a port failure
    async fn get_public_by_id(&self, id: i64) -> AppResult<CatalogExercise>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Catalog of muscle groups
#[async_trait]
pub trait MuscleGroupCatalog: Send + Sync {
    /// Every muscle group
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for non-administrators, or a port failure
    async fn get_all(&self) -> AppResult<Vec<MuscleGroup>>;

    /// Muscle group `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or a port failure
    async fn get_by_id(&self, id: i64) -> AppResult<MuscleGroup>;

    /// Muscle group named `name`, compared case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown name, or a port failure
    async fn get_by_name(&self, name: &str) -> AppResult<MuscleGroup>;

    /// Add a muscle group
    ///
    /// # Errors
    ///
    /// Returns a conflict when the name is taken, or a port failure
    async fn create(&self, request: &MuscleGroupRequest) -> AppResult<MuscleGroup>;

    /// Replace muscle group `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, a conflict when the name
    /// is taken by another group, or a port failure
    async fn update(&self, id: i64, request: &MuscleGroupRequest) -> AppResult<MuscleGroup>;

    /// Remove muscle group `id`; never cascades to exercises
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, `ResourceConflict` while
    /// exercises reference the group, or a port failure
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}
