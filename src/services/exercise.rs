// ABOUTME: Exercise logging service over the storage port and the optional remote log
// ABOUTME: Validates before writing, degrades history loads to empty, derives statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Service
//!
//! Entries are written locally under `exercise_<millis>_<suffix>` keys unless
//! a remote exercise log is attached and a user is set, in which case the
//! remote log is used. Saving reports every failure. Loading never fails:
//! unreadable records are skipped, and a failing port yields an empty history.

use crate::calculators::calculate_total_volume;
use crate::constants::messages::{
    CLEAR_EXERCISES_FAILED, DELETE_EXERCISE_FAILED, LATEST_LOG_FAILED, SAVE_EXERCISE_FAILED,
};
use crate::constants::storage_keys::EXERCISE_PREFIX;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::exercise_log::ExerciseLogApi;
use crate::formatters::format_exercise_for_storage;
use crate::logging::AppLogger;
use crate::models::{ExerciseLogEntry, ExerciseStats, User};
use crate::notifications::NotificationProvider;
use crate::storage::{load_json, save_json, StorageProvider};
use crate::validation::validate_exercise;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// A locally stored entry together with its storage key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredExercise {
    /// Key to pass to [`ExerciseService::delete_exercise`]
    pub key: String,
    /// The stored entry
    pub entry: ExerciseLogEntry,
}

/// Fresh time-ordered storage key for an exercise entry
fn new_exercise_key() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{EXERCISE_PREFIX}{}_{}",
        Utc::now().timestamp_millis(),
        &suffix[..8]
    )
}

/// Service logging exercises and reading them back
pub struct ExerciseService {
    storage: Arc<dyn StorageProvider>,
    notifier: Arc<dyn NotificationProvider>,
    remote: Option<Arc<dyn ExerciseLogApi>>,
    current_user: RwLock<Option<User>>,
}

impl ExerciseService {
    /// Create a service writing to local storage only
    #[must_use]
    pub fn new(storage: Arc<dyn StorageProvider>, notifier: Arc<dyn NotificationProvider>) -> Self {
        Self {
            storage,
            notifier,
            remote: None,
            current_user: RwLock::new(None),
        }
    }

    /// Route reads and writes through `remote` whenever a user is set
    #[must_use]
    pub fn with_remote(mut self, remote: Arc<dyn ExerciseLogApi>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Whether a remote exercise log is attached
    #[must_use]
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Replace the signed-in identity; `None` after logout
    pub async fn set_current_user(&self, user: Option<User>) {
        debug!(user_id = user.as_ref().map(|u| u.id.as_str()), "Exercise service user changed");
        *self.current_user.write().await = user;
    }

    /// Identity the service currently acts for
    pub async fn current_user(&self) -> Option<User> {
        self.current_user.read().await.clone()
    }

    /// Remote log and user id, when both are present
    async fn remote_target(&self) -> Option<(Arc<dyn ExerciseLogApi>, String)> {
        let remote = self.remote.as_ref()?;
        let user_id = self.current_user.read().await.as_ref()?.id.clone();
        Some((Arc::clone(remote), user_id))
    }

    /// Validate and persist `entry`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` "Validation failed: ..." without writing, or
    /// "Failed to save exercise: ..." when the write fails
    pub async fn save_exercise(&self, entry: &ExerciseLogEntry) -> AppResult<()> {
        if let Err(error) = validate_exercise(entry).into_result() {
            debug!(message = %error.message, "Rejected exercise entry");
            return Err(error);
        }

        let result = if let Some((remote, user_id)) = self.remote_target().await {
            remote.save(&user_id, entry).await
        } else {
            let key = new_exercise_key();
            let stored = save_json(self.storage.as_ref(), &key, &format_exercise_for_storage(entry)).await;
            AppLogger::log_storage_operation("save", &key, stored.is_ok());
            stored
        };

        match result {
            Ok(()) => {
                self.notifier.success(&format!(
                    "Saved {} - {}",
                    entry.exercise.group, entry.exercise.name
                ));
                Ok(())
            }
            Err(error) => {
                let error = error.with_prefix(SAVE_EXERCISE_FAILED);
                warn!(message = %error.message, "Exercise save failed");
                self.notifier.error(&error.message);
                Err(error)
            }
        }
    }

    /// Every logged entry; empty when the backing port fails
    pub async fn load_exercises(&self) -> Vec<ExerciseLogEntry> {
        if let Some((remote, user_id)) = self.remote_target().await {
            return remote.load(&user_id).await.unwrap_or_else(|e| {
                error!(error = %e, "Failed to load exercises from remote log");
                Vec::new()
            });
        }

        match self.stored_exercises().await {
            Ok(records) => records.into_iter().map(|record| record.entry).collect(),
            Err(e) => {
                error!(error = %e, "Failed to load exercises from storage");
                Vec::new()
            }
        }
    }

    /// Locally stored entries with their keys, oldest first
    ///
    /// Unreadable records are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage keys cannot be listed
    pub async fn stored_exercises(&self) -> AppResult<Vec<StoredExercise>> {
        let mut records = Vec::new();
        for key in self.exercise_keys().await? {
            match load_json::<ExerciseLogEntry>(self.storage.as_ref(), &key).await {
                Ok(Some(entry)) => records.push(StoredExercise { key, entry }),
                Ok(None) => {}
                Err(e) => warn!(key = %key, error = %e, "Skipping unreadable exercise record"),
            }
        }
        Ok(records)
    }

    async fn exercise_keys(&self) -> AppResult<Vec<String>> {
        Ok(self
            .storage
            .keys()
            .await?
            .into_iter()
            .filter(|key| key.starts_with(EXERCISE_PREFIX))
            .collect())
    }

    /// Delete the locally stored entry under `key`
    ///
    /// # Errors
    ///
    /// Returns "Failed to delete exercise: ..." when the storage write fails
    pub async fn delete_exercise(&self, key: &str) -> AppResult<()> {
        let result = self.storage.remove(key).await;
        AppLogger::log_storage_operation("remove", key, result.is_ok());
        result.map_err(|e| e.with_prefix(DELETE_EXERCISE_FAILED))
    }

    /// Delete every locally stored entry, leaving other keys untouched
    ///
    /// # Errors
    ///
    /// Returns "Failed to clear exercises: ..." when listing or deleting fails
    pub async fn clear_all_exercises(&self) -> AppResult<()> {
        let keys = self
            .exercise_keys()
            .await
            .map_err(|e| e.with_prefix(CLEAR_EXERCISES_FAILED))?;
        for key in &keys {
            self.storage
                .remove(key)
                .await
                .map_err(|e| e.with_prefix(CLEAR_EXERCISES_FAILED))?;
        }
        info!(removed = keys.len(), "Cleared exercise history");
        self.notifier
            .info(&format!("Cleared {} exercises", keys.len()));
        Ok(())
    }

    /// Count, set count and summed volume over the loaded history
    pub async fn get_exercise_stats(&self) -> ExerciseStats {
        let exercises = self.load_exercises().await;
        ExerciseStats {
            total_exercises: exercises.len(),
            total_sets: exercises.iter().map(|e| e.sets.len()).sum(),
            total_volume: exercises
                .iter()
                .map(|e| calculate_total_volume(&e.sets))
                .sum(),
        }
    }

    /// Most recent remote entry for catalog exercise `exercise_id`
    ///
    /// `Ok(None)` means the user has no previous log of that exercise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` without a remote log, `AuthRequired` without a
    /// current user, or "Failed to fetch latest log: ..." on remote failure
    pub async fn get_latest_log(&self, exercise_id: i64) -> AppResult<Option<ExerciseLogEntry>> {
        let Some(remote) = self.remote.as_ref() else {
            return Err(AppError::config(
                "Latest log lookup requires remote exercise storage",
            ));
        };
        let Some(user_id) = self.current_user.read().await.as_ref().map(|u| u.id.clone()) else {
            return Err(AppError::new(
                ErrorCode::AuthRequired,
                "Latest log lookup requires a signed-in user",
            ));
        };
        remote
            .latest(&user_id, exercise_id)
            .await
            .map_err(|e| e.with_prefix(LATEST_LOG_FAILED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_prefixed_and_unique() {
        let first = new_exercise_key();
        let second = new_exercise_key();
        assert!(first.starts_with(EXERCISE_PREFIX));
        assert_ne!(first, second);
        assert_eq!(first.rsplit('_').next().map(str::len), Some(8));
    }
}
