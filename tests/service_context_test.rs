// ABOUTME: Integration tests for service context wiring from client configuration
// ABOUTME: Exercises the local stack end to end, including what survives a restart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::RecordingNotifier;
use liftlog::config::{ClientConfig, StorageBackend};
use liftlog::constants::seed;
use liftlog::context::ServiceContext;
use liftlog::errors::ErrorCode;
use liftlog::models::{LoginCredentials, MuscleGroupRequest};
use liftlog::notifications::NotificationKind;
use std::sync::Arc;
use tempfile::TempDir;

fn local_config(admin_password: Option<&str>) -> ClientConfig {
    ClientConfig {
        seed_admin_password: admin_password.map(str::to_owned),
        ..ClientConfig::default()
    }
}

#[tokio::test]
async fn test_local_context_wires_local_backends() {
    common::init_test_logging();
    let notifier = Arc::new(RecordingNotifier::new());
    let context = ServiceContext::with_notifier(&local_config(None), Arc::clone(&notifier) as _)
        .await
        .unwrap();

    assert_eq!(context.auth().backend_name(), "local");
    assert_eq!(context.storage().backend_name(), "memory");
    assert!(!context.exercises().has_remote());
    assert_eq!(context.plans().backend_name(), "local");
    assert_eq!(context.admin_exercises().list_public().await.unwrap().len(), 3);

    context
        .exercises()
        .save_exercise(&common::bench_press(&[(100.0, 5)]))
        .await
        .unwrap();
    assert_eq!(notifier.count(NotificationKind::Success), 1);
}

#[tokio::test]
async fn test_seeded_admin_can_manage_catalog() {
    let context = ServiceContext::with_notifier(
        &local_config(Some("AdminPass1")),
        Arc::new(RecordingNotifier::new()),
    )
    .await
    .unwrap();

    context
        .auth()
        .login(&LoginCredentials::new(seed::ADMIN_EMAIL, "AdminPass1"))
        .await
        .unwrap();
    let user = context.sync_current_user().await.unwrap();
    assert!(user.is_admin());
    assert_eq!(context.exercises().current_user().await, Some(user));

    let group = context
        .admin_muscle_groups()
        .create(&MuscleGroupRequest::new("core", None))
        .await
        .unwrap();
    assert_eq!(group.name, "CORE");

    context.auth().logout().await.unwrap();
    assert_eq!(context.sync_current_user().await, None);
    assert_eq!(
        context
            .admin_muscle_groups()
            .get_all()
            .await
            .unwrap_err()
            .code,
        ErrorCode::AuthRequired
    );
}

#[tokio::test]
async fn test_session_is_restored_from_file_storage() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig {
        storage: StorageBackend::File {
            path: dir.path().join("store.json"),
        },
        ..ClientConfig::default()
    };

    {
        let context = ServiceContext::from_config(&config).await.unwrap();
        context
            .auth()
            .register(&common::valid_registration("lifter@example.com"))
            .await
            .unwrap();
        context
            .exercises()
            .save_exercise(&common::bench_press(&[(100.0, 5)]))
            .await
            .unwrap();
    }

    let restarted = ServiceContext::from_config(&config).await.unwrap();
    assert_eq!(
        restarted.exercises().current_user().await.map(|u| u.email),
        Some("lifter@example.com".to_owned())
    );
    assert_eq!(restarted.exercises().load_exercises().await.len(), 1);
}

#[tokio::test]
async fn test_catalog_edits_and_plans_survive_restart() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig {
        storage: StorageBackend::File {
            path: dir.path().join("store.json"),
        },
        seed_admin_password: Some("AdminPass1".to_owned()),
        ..ClientConfig::default()
    };

    {
        let context = ServiceContext::from_config(&config).await.unwrap();
        context
            .auth()
            .login(&LoginCredentials::new(seed::ADMIN_EMAIL, "AdminPass1"))
            .await
            .unwrap();
        context.sync_current_user().await;
        context
            .admin_muscle_groups()
            .create(&MuscleGroupRequest::new("core", None))
            .await
            .unwrap();
        context
            .plans()
            .create_plan(&common::strength_plan("Strength"))
            .await
            .unwrap();
    }

    let restarted = ServiceContext::from_config(&config).await.unwrap();
    assert_eq!(
        restarted
            .admin_muscle_groups()
            .get_by_name("Core")
            .await
            .unwrap()
            .name,
        "CORE"
    );
    let plans = restarted.plans().list_plans().await.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].name, "Strength");
}

#[tokio::test]
async fn test_invalid_remote_url_fails_construction() {
    let config = ClientConfig {
        use_remote_auth: true,
        base_url: "not a url".to_owned(),
        ..ClientConfig::default()
    };
    let error = ServiceContext::from_config(&config).await.err().unwrap();
    assert_eq!(error.code, ErrorCode::ConfigError);
}
