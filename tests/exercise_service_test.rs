// ABOUTME: Integration tests for the exercise logging service
// ABOUTME: Covers validation gating, degraded loads, statistics, clearing and the remote route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{FailingStorage, RecordingNotifier, RecordingStorage};
use liftlog::errors::{AppError, AppResult, ErrorCode};
use liftlog::exercise_log::ExerciseLogApi;
use liftlog::models::{ExerciseLogEntry, User, UserRole};
use liftlog::notifications::NotificationKind;
use liftlog::services::ExerciseService;
use liftlog::storage::memory::InMemoryStorage;
use liftlog::storage::StorageProvider;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;

fn service_over(storage: InMemoryStorage) -> (ExerciseService, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = ExerciseService::new(Arc::new(storage), Arc::clone(&notifier) as _);
    (service, notifier)
}

fn lifter() -> User {
    User {
        id: "user_1".to_owned(),
        username: "lifter".to_owned(),
        email: "lifter@example.com".to_owned(),
        role: UserRole::User,
    }
}

/// Remote log double keeping entries per user
#[derive(Default)]
struct FakeRemoteLog {
    saved: Mutex<Vec<(String, ExerciseLogEntry)>>,
    fail: bool,
}

#[async_trait]
impl ExerciseLogApi for FakeRemoteLog {
    async fn save(&self, user_id: &str, entry: &ExerciseLogEntry) -> AppResult<()> {
        if self.fail {
            return Err(AppError::external_service("HTTP 500"));
        }
        self.saved
            .lock()
            .await
            .push((user_id.to_owned(), entry.clone()));
        Ok(())
    }

    async fn load(&self, user_id: &str) -> AppResult<Vec<ExerciseLogEntry>> {
        if self.fail {
            return Err(AppError::external_service("HTTP 500"));
        }
        Ok(self
            .saved
            .lock()
            .await
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, entry)| entry.clone())
            .collect())
    }

    async fn latest(&self, user_id: &str, _exercise_id: i64) -> AppResult<Option<ExerciseLogEntry>> {
        Ok(self.load(user_id).await?.pop())
    }
}

#[tokio::test]
async fn test_save_then_load_round_trips_locally() {
    common::init_test_logging();
    let (service, notifier) = service_over(InMemoryStorage::new());

    service
        .save_exercise(&common::bench_press(&[(100.0, 10), (100.0, 8)]))
        .await
        .unwrap();

    let loaded = service.load_exercises().await;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].exercise.group, "CHEST");
    assert_eq!(loaded[0].sets.len(), 2);
    // Stored in the display form, local time
    assert_eq!(loaded[0].timestamp.len(), "15/01/2025 10:30:00".len());
    assert_eq!(
        notifier.notifications(),
        vec![(NotificationKind::Success, "Saved CHEST - Bench Press".to_owned())]
    );
}

#[tokio::test]
async fn test_invalid_entry_never_reaches_storage() {
    let storage = Arc::new(RecordingStorage::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = ExerciseService::new(Arc::clone(&storage) as _, Arc::clone(&notifier) as _);

    let mut entry = common::bench_press(&[(1500.0, 10)]);
    entry.exercise.name = "   ".to_owned();
    let error = service.save_exercise(&entry).await.unwrap_err();

    assert!(error.is_validation());
    assert!(error.message.starts_with("Validation failed: "));
    assert_eq!(storage.save_count(), 0);
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_empty_entry_reports_every_rule_without_writing() {
    let storage = Arc::new(RecordingStorage::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = ExerciseService::new(Arc::clone(&storage) as _, Arc::clone(&notifier) as _);

    let error = service
        .save_exercise(&common::entry("", "", &[]))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("group"));
    assert!(error.message.contains("name"));
    assert!(error.message.contains("at least one set"));
    assert_eq!(storage.save_count(), 0);
    assert!(storage.keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_entry_without_sets_is_rejected() {
    let (service, _notifier) = service_over(InMemoryStorage::new());
    let error = service
        .save_exercise(&common::bench_press(&[]))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_storage_failure_is_prefixed_and_notified() {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = ExerciseService::new(Arc::new(FailingStorage), Arc::clone(&notifier) as _);

    let error = service
        .save_exercise(&common::bench_press(&[(100.0, 10)]))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert_eq!(error.message, "Failed to save exercise: disk unavailable");
    assert_eq!(notifier.count(NotificationKind::Error), 1);
}

#[tokio::test]
async fn test_corrupt_record_is_skipped() {
    let storage = InMemoryStorage::new();
    let (service, _notifier) = service_over(storage.clone());
    service
        .save_exercise(&common::bench_press(&[(100.0, 10)]))
        .await
        .unwrap();
    storage.insert_raw("exercise_0_broken", "{oops").await;

    let loaded = service.load_exercises().await;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].exercise.name, "Bench Press");
}

#[tokio::test]
async fn test_one_corrupt_record_among_three_keeps_the_other_two() {
    let storage = InMemoryStorage::new();
    let (service, _notifier) = service_over(storage.clone());
    storage
        .save("exercise_1_a", &json!(common::bench_press(&[(100.0, 10)])))
        .await
        .unwrap();
    storage.insert_raw("exercise_2_b", "{\"timestamp\": ").await;
    storage
        .save(
            "exercise_3_c",
            &json!(common::entry("LEGS", "Squat", &[(140.0, 5)])),
        )
        .await
        .unwrap();

    let mut names: Vec<String> = service
        .load_exercises()
        .await
        .into_iter()
        .map(|entry| entry.exercise.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Bench Press".to_owned(), "Squat".to_owned()]);
}

#[tokio::test]
async fn test_failing_storage_loads_empty_history() {
    let service = ExerciseService::new(Arc::new(FailingStorage), Arc::new(RecordingNotifier::new()));
    assert!(service.load_exercises().await.is_empty());

    let stats = service.get_exercise_stats().await;
    assert_eq!(stats.total_exercises, 0);
    assert!(stats.total_volume.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_stats_sum_over_history() {
    let (service, _notifier) = service_over(InMemoryStorage::new());
    service
        .save_exercise(&common::bench_press(&[(100.0, 10), (100.0, 8)]))
        .await
        .unwrap();
    service
        .save_exercise(&common::entry("BACK", "Row", &[(60.0, 12)]))
        .await
        .unwrap();

    let stats = service.get_exercise_stats().await;
    assert_eq!(stats.total_exercises, 2);
    assert_eq!(stats.total_sets, 3);
    assert!((stats.total_volume - 2520.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_clear_leaves_other_keys() {
    let storage = InMemoryStorage::new();
    let (service, notifier) = service_over(storage.clone());
    storage.save("local_auth_token", &json!("token")).await.unwrap();
    for _ in 0..3 {
        service
            .save_exercise(&common::bench_press(&[(80.0, 5)]))
            .await
            .unwrap();
    }

    service.clear_all_exercises().await.unwrap();

    assert_eq!(storage.keys().await.unwrap(), vec!["local_auth_token".to_owned()]);
    assert!(notifier
        .notifications()
        .contains(&(NotificationKind::Info, "Cleared 3 exercises".to_owned())));
}

#[tokio::test]
async fn test_delete_by_stored_key() {
    let (service, _notifier) = service_over(InMemoryStorage::new());
    service
        .save_exercise(&common::bench_press(&[(100.0, 10)]))
        .await
        .unwrap();
    service
        .save_exercise(&common::entry("LEGS", "Squat", &[(140.0, 5)]))
        .await
        .unwrap();

    let stored = service.stored_exercises().await.unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|record| record.key.starts_with("exercise_")));

    let squat = stored
        .iter()
        .find(|record| record.entry.exercise.name == "Squat")
        .unwrap();
    service.delete_exercise(&squat.key).await.unwrap();

    let remaining = service.load_exercises().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].exercise.name, "Bench Press");
}

#[tokio::test]
async fn test_delete_failure_is_prefixed() {
    let service = ExerciseService::new(Arc::new(FailingStorage), Arc::new(RecordingNotifier::new()));
    let error = service.delete_exercise("exercise_1").await.unwrap_err();
    assert_eq!(error.message, "Failed to delete exercise: disk unavailable");

    let error = service.clear_all_exercises().await.unwrap_err();
    assert_eq!(error.message, "Failed to clear exercises: disk unavailable");
}

#[tokio::test]
async fn test_latest_requires_remote_and_user() {
    let (service, _notifier) = service_over(InMemoryStorage::new());
    let error = service.get_latest_log(1).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);

    let (service, _notifier) = service_over(InMemoryStorage::new());
    let service = service.with_remote(Arc::new(FakeRemoteLog::default()));
    let error = service.get_latest_log(1).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
}

#[tokio::test]
async fn test_signed_in_user_routes_to_remote_log() {
    let storage = InMemoryStorage::new();
    let remote = Arc::new(FakeRemoteLog::default());
    let (service, _notifier) = service_over(storage.clone());
    let service = service.with_remote(Arc::clone(&remote) as _);

    // Signed out: local storage
    service
        .save_exercise(&common::bench_press(&[(100.0, 10)]))
        .await
        .unwrap();
    assert_eq!(storage.len().await, 1);
    assert!(remote.saved.lock().await.is_empty());

    service.set_current_user(Some(lifter())).await;
    service
        .save_exercise(&common::entry("LEGS", "Squat", &[(140.0, 5)]))
        .await
        .unwrap();
    assert_eq!(storage.len().await, 1);

    let history = service.load_exercises().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].exercise.name, "Squat");

    let latest = service.get_latest_log(7).await.unwrap().unwrap();
    assert_eq!(latest.exercise.name, "Squat");

    service.set_current_user(None).await;
    assert_eq!(service.load_exercises().await[0].exercise.name, "Bench Press");
}

#[tokio::test]
async fn test_remote_failure_degrades_history_and_prefixes_save() {
    let remote = Arc::new(FakeRemoteLog {
        fail: true,
        ..FakeRemoteLog::default()
    });
    let (service, notifier) = service_over(InMemoryStorage::new());
    let service = service.with_remote(remote);
    service.set_current_user(Some(lifter())).await;

    assert!(service.load_exercises().await.is_empty());

    let error = service
        .save_exercise(&common::bench_press(&[(100.0, 10)]))
        .await
        .unwrap_err();
    assert_eq!(error.message, "Failed to save exercise: HTTP 500");
    assert_eq!(notifier.count(NotificationKind::Error), 1);
}
