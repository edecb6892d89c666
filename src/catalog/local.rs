// ABOUTME: Local reference catalog seeded with the default muscle groups and exercises
// ABOUTME: Enforces name uniqueness and referential integrity; optionally persisted in storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ExerciseCatalog, MuscleGroupCatalog};
use crate::constants::messages::{EXERCISE_EXISTS, MUSCLE_GROUP_EXISTS, MUSCLE_GROUP_REFERENCED};
use crate::constants::seed;
use crate::constants::storage_keys::LOCAL_CATALOG;
use crate::errors::{AppError, AppResult};
use crate::models::{CatalogExercise, CatalogExerciseRequest, MuscleGroup, MuscleGroupRequest};
use crate::storage::{load_json, save_json, StorageProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogState {
    muscle_groups: Vec<MuscleGroup>,
    exercises: Vec<CatalogExercise>,
    next_group_id: i64,
    next_exercise_id: i64,
}

impl CatalogState {
    fn group_by_id(&self, id: i64) -> AppResult<&MuscleGroup> {
        self.muscle_groups
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| AppError::not_found("Muscle group").with_resource_id(id.to_string()))
    }

    fn group_by_name(&self, name: &str) -> Option<&MuscleGroup> {
        let name = name.trim();
        self.muscle_groups
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
    }

    fn exercise_index(&self, id: i64) -> AppResult<usize> {
        self.exercises
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("Exercise").with_resource_id(id.to_string()))
    }

    /// Canonical group name of an exercise request, which must reference a known group
    fn resolve_group(&self, group: &str) -> AppResult<String> {
        self.group_by_name(group)
            .map(|g| g.name.clone())
            .ok_or_else(|| AppError::not_found("Muscle group").with_resource_id(group.trim()))
    }

    fn ensure_exercise_name_free(&self, name: &str, except: Option<i64>) -> AppResult<()> {
        let name = name.trim();
        let taken = self
            .exercises
            .iter()
            .any(|e| Some(e.id) != except && e.name.eq_ignore_ascii_case(name));
        if taken {
            return Err(AppError::already_exists(EXERCISE_EXISTS));
        }
        Ok(())
    }

    fn ensure_group_name_free(&self, name: &str, except: Option<i64>) -> AppResult<()> {
        match self.group_by_name(name) {
            Some(existing) if Some(existing.id) != except => {
                Err(AppError::already_exists(MUSCLE_GROUP_EXISTS))
            }
            _ => Ok(()),
        }
    }

    fn insert_group(&mut self, name: &str, description: Option<String>) -> MuscleGroup {
        self.next_group_id += 1;
        let group = MuscleGroup {
            id: self.next_group_id,
            name: name.trim().to_uppercase(),
            description,
        };
        self.muscle_groups.push(group.clone());
        group
    }

    fn insert_exercise(&mut self, name: &str, group: String) -> CatalogExercise {
        self.next_exercise_id += 1;
        let exercise = CatalogExercise {
            id: self.next_exercise_id,
            name: name.trim().to_owned(),
            group,
        };
        self.exercises.push(exercise.clone());
        exercise
    }
}

/// Reference catalog held in memory, optionally mirrored to a [`StorageProvider`]
///
/// Implements both [`ExerciseCatalog`] and [`MuscleGroupCatalog`] over one
/// shared state so referential checks see a consistent view. A change is
/// visible only after it has been written to storage.
pub struct LocalCatalog {
    state: RwLock<CatalogState>,
    storage: Option<Arc<dyn StorageProvider>>,
}

impl LocalCatalog {
    /// In-memory catalog holding the default muscle groups and exercises
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            state: RwLock::new(seed_state()),
            storage: None,
        }
    }

    /// Catalog stored under `local_catalog` in `storage`, seeded on first use
    ///
    /// # Errors
    ///
    /// Returns a port failure if the stored catalog cannot be read or the
    /// seed cannot be written
    pub async fn open(storage: Arc<dyn StorageProvider>) -> AppResult<Self> {
        let state = if let Some(state) = load_json(storage.as_ref(), LOCAL_CATALOG).await? {
            state
        } else {
            let state = seed_state();
            save_json(storage.as_ref(), LOCAL_CATALOG, &state).await?;
            debug!(backend = storage.backend_name(), "Seeded local catalog");
            state
        };
        Ok(Self {
            state: RwLock::new(state),
            storage: Some(storage),
        })
    }

    /// Apply `change` to a copy of the state, persist it, then publish it
    async fn mutate<T, F>(&self, change: F) -> AppResult<T>
    where
        T: Send,
        F: FnOnce(&mut CatalogState) -> AppResult<T> + Send,
    {
        let mut guard = self.state.write().await;
        let mut next = guard.clone();
        let outcome = change(&mut next)?;
        if let Some(storage) = &self.storage {
            save_json(storage.as_ref(), LOCAL_CATALOG, &next).await?;
        }
        *guard = next;
        Ok(outcome)
    }
}

fn seed_state() -> CatalogState {
    let mut state = CatalogState::default();
    for (name, description) in seed::MUSCLE_GROUPS {
        state.insert_group(name, Some((*description).to_owned()));
    }
    for (name, group) in seed::EXERCISES {
        state.insert_exercise(name, (*group).to_owned());
    }
    state
}

#[async_trait]
impl MuscleGroupCatalog for LocalCatalog {
    async fn get_all(&self) -> AppResult<Vec<MuscleGroup>> {
        Ok(self.state.read().await.muscle_groups.clone())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<MuscleGroup> {
        self.state.read().await.group_by_id(id).cloned()
    }

    async fn get_by_name(&self, name: &str) -> AppResult<MuscleGroup> {
        self.state
            .read()
            .await
            .group_by_name(name)
            .cloned()
            .ok_or_else(|| AppError::not_found("Muscle group").with_resource_id(name.trim()))
    }

    async fn create(&self, request: &MuscleGroupRequest) -> AppResult<MuscleGroup> {
        let group = self
            .mutate(|state| {
                state.ensure_group_name_free(&request.name, None)?;
                Ok(state.insert_group(&request.name, request.description.clone()))
            })
            .await?;
        debug!(id = group.id, name = %group.name, "Created muscle group");
        Ok(group)
    }

    async fn update(&self, id: i64, request: &MuscleGroupRequest) -> AppResult<MuscleGroup> {
        self.mutate(|state| {
            let previous = state.group_by_id(id)?.name.clone();
            state.ensure_group_name_free(&request.name, Some(id))?;

            let updated = MuscleGroup {
                id,
                name: request.name.trim().to_uppercase(),
                description: request.description.clone(),
            };
            // Renames carry over to the exercises that reference the group
            for exercise in &mut state.exercises {
                if exercise.group == previous {
                    exercise.group.clone_from(&updated.name);
                }
            }
            if let Some(slot) = state.muscle_groups.iter_mut().find(|g| g.id == id) {
                *slot = updated.clone();
            }
            Ok(updated)
        })
        .await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let name = self
            .mutate(|state| {
                let name = state.group_by_id(id)?.name.clone();
                if state.exercises.iter().any(|e| e.group == name) {
                    return Err(AppError::conflict(MUSCLE_GROUP_REFERENCED)
                        .with_resource_id(id.to_string()));
                }
                state.muscle_groups.retain(|g| g.id != id);
                Ok(name)
            })
            .await?;
        debug!(id, name = %name, "Deleted muscle group");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}

#[async_trait]
impl ExerciseCatalog for LocalCatalog {
    async fn get_all(&self) -> AppResult<Vec<CatalogExercise>> {
        Ok(self.state.read().await.exercises.clone())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<CatalogExercise> {
        let state = self.state.read().await;
        let index = state.exercise_index(id)?;
        Ok(state.exercises[index].clone())
    }

    async fn create(&self, request: &CatalogExerciseRequest) -> AppResult<CatalogExercise> {
        let exercise = self
            .mutate(|state| {
                let group = state.resolve_group(&request.group)?;
                state.ensure_exercise_name_free(&request.name, None)?;
                Ok(state.insert_exercise(&request.name, group))
            })
            .await?;
        debug!(id = exercise.id, name = %exercise.name, "Created catalog exercise");
        Ok(exercise)
    }

    async fn update(&self, id: i64, request: &CatalogExerciseRequest) -> AppResult<CatalogExercise> {
        self.mutate(|state| {
            let index = state.exercise_index(id)?;
            let group = state.resolve_group(&request.group)?;
            state.ensure_exercise_name_free(&request.name, Some(id))?;

            let updated = CatalogExercise {
                id,
                name: request.name.trim().to_owned(),
                group,
            };
            state.exercises[index] = updated.clone();
            Ok(updated)
        })
        .await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.mutate(|state| {
            let index = state.exercise_index(id)?;
            state.exercises.remove(index);
            Ok(())
        })
        .await
    }

    async fn list_public(&self) -> AppResult<Vec<CatalogExercise>> {
        ExerciseCatalog::get_all(self).await
    }

    async fn get_public_by_id(&self, id: i64) -> AppResult<CatalogExercise> {
        ExerciseCatalog::get_by_id(self, id).await
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}
