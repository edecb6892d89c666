// ABOUTME: HTTP exercise log adapter for /api/v1/users/{id}/logs
// ABOUTME: Converts stored timestamps to ISO-8601 and maps backend failures to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ExerciseLogApi;
use crate::auth::{require_token, AuthProvider};
use crate::constants::api_paths::USERS;
use crate::errors::{AppError, AppResult};
use crate::formatters::parse_timestamp;
use crate::http_client::{ApiClient, ApiResponse};
use crate::models::ExerciseLogEntry;
use async_trait::async_trait;
use chrono::{Local, SecondsFormat, Utc};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::debug;

/// Exercise log stored on the remote backend
pub struct ApiExerciseLog {
    client: ApiClient,
    auth: Arc<dyn AuthProvider>,
}

impl ApiExerciseLog {
    /// Create an adapter authenticating with the token held by `auth`
    #[must_use]
    pub fn new(client: ApiClient, auth: Arc<dyn AuthProvider>) -> Self {
        Self { client, auth }
    }
}

fn logs_path(user_id: &str) -> String {
    format!("{USERS}/{user_id}/logs")
}

/// Copy of `entry` with an ISO-8601 UTC timestamp, as the backend expects
fn to_wire(entry: &ExerciseLogEntry) -> ExerciseLogEntry {
    let when = parse_timestamp(&entry.timestamp).unwrap_or_else(Local::now);
    ExerciseLogEntry {
        timestamp: when
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        ..entry.clone()
    }
}

/// Failure of a log call; the body's `message` wins over the bare status
fn log_error(response: &ApiResponse) -> AppError {
    let message = response
        .error_field(&["message", "error"])
        .unwrap_or_else(|| format!("HTTP {}", response.status_code()));
    AppError::external_service(message).with_http_status(response.status_code())
}

#[async_trait]
impl ExerciseLogApi for ApiExerciseLog {
    async fn save(&self, user_id: &str, entry: &ExerciseLogEntry) -> AppResult<()> {
        let token = require_token(self.auth.as_ref()).await?;
        // The endpoint takes a batch
        let batch = [to_wire(entry)];
        let response = self
            .client
            .post(&logs_path(user_id), Some(token.as_str()), &batch)
            .await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(log_error(&response))
        }
    }

    async fn load(&self, user_id: &str) -> AppResult<Vec<ExerciseLogEntry>> {
        let token = require_token(self.auth.as_ref()).await?;
        let response = self.client.get(&logs_path(user_id), Some(token.as_str())).await?;
        if !response.is_success() {
            return Err(log_error(&response));
        }
        response.json()
    }

    async fn latest(
        &self,
        user_id: &str,
        exercise_id: i64,
    ) -> AppResult<Option<ExerciseLogEntry>> {
        let token = require_token(self.auth.as_ref()).await?;
        let path = format!("{}/latest?exerciseId={exercise_id}", logs_path(user_id));
        let response = self.client.get(&path, Some(token.as_str())).await?;

        match response.status {
            StatusCode::NOT_FOUND | StatusCode::NO_CONTENT => {
                debug!(user_id, exercise_id, "No previous log for exercise");
                Ok(None)
            }
            status if status.is_success() => {
                if response.body.trim().is_empty() {
                    Ok(None)
                } else {
                    response.json()
                }
            }
            status => Err(AppError::external_service(status.as_u16().to_string())
                .with_http_status(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exercise, ExerciseSet};

    #[test]
    fn test_wire_timestamp_is_iso_utc() {
        let entry = ExerciseLogEntry {
            timestamp: "2025-01-15T10:30:00+02:00".to_owned(),
            exercise: Exercise::new("LEGS", "Squat"),
            sets: vec![ExerciseSet::new(140.0, 5)],
            failure: false,
        };
        let wire = to_wire(&entry);
        assert_eq!(wire.timestamp, "2025-01-15T08:30:00.000Z");
        assert_eq!(wire.sets, entry.sets);
    }

    #[test]
    fn test_log_error_falls_back_to_status() {
        let error = log_error(&ApiResponse {
            status: StatusCode::BAD_GATEWAY,
            body: String::new(),
        });
        assert_eq!(error.message, "HTTP 502");
        assert!(error.is_port_failure());
    }
}
