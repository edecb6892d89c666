// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, entry factories and failing or recording port doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `liftlog`
//!
//! Common fixtures and test doubles for the storage, auth and notification
//! ports, so individual test files only describe behaviour.

use async_trait::async_trait;
use liftlog::auth::{AuthProvider, LocalAuthProvider};
use liftlog::errors::{AppError, AppResult};
use liftlog::models::{
    AuthSession, DurationUnit, Exercise, ExerciseLogEntry, ExerciseSet, ExerciseTarget,
    LoginCredentials, RegisterCredentials, TargetExercise, WorkoutDay, WorkoutPlan,
};
use liftlog::notifications::{NotificationKind, NotificationProvider};
use liftlog::storage::memory::InMemoryStorage;
use liftlog::storage::StorageProvider;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A valid bench press entry with the given sets
pub fn bench_press(sets: &[(f64, u32)]) -> ExerciseLogEntry {
    entry("CHEST", "Bench Press", sets)
}

/// A log entry performed at a fixed point in time
pub fn entry(group: &str, name: &str, sets: &[(f64, u32)]) -> ExerciseLogEntry {
    ExerciseLogEntry {
        timestamp: "2025-01-15T10:30:00Z".to_owned(),
        exercise: Exercise::new(group, name),
        sets: sets
            .iter()
            .map(|&(weight, reps)| ExerciseSet::new(weight, reps))
            .collect(),
        failure: false,
    }
}

/// An eight-week plan with one lower-body day holding the default squat target
pub fn strength_plan(name: &str) -> WorkoutPlan {
    let mut plan = WorkoutPlan::new(name, 8, DurationUnit::Weeks);
    plan.workout_days.push(WorkoutDay {
        id: None,
        description: "Lower".to_owned(),
        workout_plan_id: None,
        exercises: vec![ExerciseTarget::new(TargetExercise {
            id: "2".to_owned(),
            name: "Squat".to_owned(),
            group: "LEGS".to_owned(),
        })],
    });
    plan
}

/// Register credentials that pass validation
pub fn valid_registration(email: &str) -> RegisterCredentials {
    RegisterCredentials::new("lifter", email, "Password1")
}

/// Local auth over `storage` with the cheapest bcrypt cost
pub fn fast_local_auth(storage: Arc<dyn StorageProvider>) -> LocalAuthProvider {
    LocalAuthProvider::with_cost(storage, 4)
}

// ============================================================================
// Storage doubles
// ============================================================================

/// In-memory storage that counts writes
#[derive(Default)]
pub struct RecordingStorage {
    inner: InMemoryStorage,
    saves: AtomicUsize,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The wrapped store, sharing its map
    pub fn inner(&self) -> InMemoryStorage {
        self.inner.clone()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StorageProvider for RecordingStorage {
    async fn save(&self, key: &str, value: &Value) -> AppResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(key, value).await
    }

    async fn load(&self, key: &str) -> AppResult<Option<Value>> {
        self.inner.load(key).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    async fn clear(&self) -> AppResult<()> {
        self.inner.clear().await
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        self.inner.keys().await
    }

    fn backend_name(&self) -> &'static str {
        "recording"
    }
}

/// Storage whose every operation fails
pub struct FailingStorage;

impl FailingStorage {
    fn failure() -> AppError {
        AppError::storage("disk unavailable")
    }
}

#[async_trait]
impl StorageProvider for FailingStorage {
    async fn save(&self, _key: &str, _value: &Value) -> AppResult<()> {
        Err(Self::failure())
    }

    async fn load(&self, _key: &str) -> AppResult<Option<Value>> {
        Err(Self::failure())
    }

    async fn remove(&self, _key: &str) -> AppResult<()> {
        Err(Self::failure())
    }

    async fn clear(&self) -> AppResult<()> {
        Err(Self::failure())
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        Err(Self::failure())
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

// ============================================================================
// Notification double
// ============================================================================

/// Notifier that keeps everything it was asked to show
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<(NotificationKind, String)> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter(|(seen, _)| *seen == kind)
            .count()
    }
}

impl NotificationProvider for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.seen.lock().unwrap().push((kind, message.to_owned()));
    }
}

// ============================================================================
// Auth double
// ============================================================================

/// Auth port whose every call fails with a storage error, counting calls
#[derive(Default)]
pub struct FailingAuthProvider {
    calls: AtomicUsize,
}

impl FailingAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> AppResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::storage("session store unavailable"))
    }
}

#[async_trait]
impl AuthProvider for FailingAuthProvider {
    async fn login(&self, _credentials: &LoginCredentials) -> AppResult<AuthSession> {
        self.fail()
    }

    async fn register(&self, _credentials: &RegisterCredentials) -> AppResult<AuthSession> {
        self.fail()
    }

    async fn logout(&self) -> AppResult<()> {
        self.fail()
    }

    async fn check_auth(&self) -> AppResult<AuthSession> {
        self.fail()
    }

    async fn get_token(&self) -> AppResult<Option<String>> {
        self.fail()
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
