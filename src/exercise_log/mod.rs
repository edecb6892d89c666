// ABOUTME: Remote exercise log port used when exercises live on the backend
// ABOUTME: Per-user save, history listing and latest-log lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP implementation against the exercise-logging API
pub mod api;

pub use api::ApiExerciseLog;

use crate::errors::AppResult;
use crate::models::ExerciseLogEntry;
use async_trait::async_trait;

/// Remote store of a user's exercise log
#[async_trait]
pub trait ExerciseLogApi: Send + Sync {
    /// Append `entry` to the log of `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the entry or cannot be reached
    async fn save(&self, user_id: &str, entry: &ExerciseLogEntry) -> AppResult<()>;

    /// Every entry logged by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or answers with a failure
    async fn load(&self, user_id: &str) -> AppResult<Vec<ExerciseLogEntry>>;

    /// Most recent entry of `user_id` for catalog exercise `exercise_id`
    ///
    /// `Ok(None)` means the user never logged that exercise.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or answers with a failure
    async fn latest(&self, user_id: &str, exercise_id: i64)
        -> AppResult<Option<ExerciseLogEntry>>;
}
