// ABOUTME: Composition root wiring storage, auth, notifications and services from configuration
// ABOUTME: Built once at startup and passed down; no module-level singletons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service context
//!
//! [`ServiceContext`] resolves every local/remote switch of [`ClientConfig`]
//! exactly once and hands out the resulting services. Callers that need a
//! different notifier (for example a UI subscribing to a
//! [`BroadcastNotifier`](crate::notifications::BroadcastNotifier)) use
//! [`ServiceContext::with_notifier`].

use crate::auth::{AuthProvider, LocalAuthProvider, RemoteAuthProvider};
use crate::catalog::{
    ExerciseCatalog, HttpExerciseCatalog, HttpMuscleGroupCatalog, LocalCatalog, MuscleGroupCatalog,
};
use crate::config::ClientConfig;
use crate::constants::seed;
use crate::errors::AppResult;
use crate::exercise_log::ApiExerciseLog;
use crate::http_client::ApiClient;
use crate::models::User;
use crate::notifications::{ConsoleNotifier, NotificationProvider};
use crate::services::{
    AdminExerciseService, AdminMuscleGroupService, AuthService, ExerciseService, WorkoutPlanService,
};
use crate::storage::factory::create_storage;
use crate::storage::StorageProvider;
use crate::workout_plan::{ApiWorkoutPlans, StoredWorkoutPlans, WorkoutPlanApi};
use std::sync::Arc;
use tracing::info;

/// Every service of the client, wired from one configuration
pub struct ServiceContext {
    config: ClientConfig,
    storage: Arc<dyn StorageProvider>,
    notifier: Arc<dyn NotificationProvider>,
    auth: AuthService,
    exercises: ExerciseService,
    plans: WorkoutPlanService,
    admin_exercises: AdminExerciseService,
    admin_muscle_groups: AdminMuscleGroupService,
}

impl ServiceContext {
    /// Build the context with notifications written to the log
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the storage backend
    /// cannot be opened, or the administrator cannot be seeded
    pub async fn from_config(config: &ClientConfig) -> AppResult<Self> {
        Self::with_notifier(config, Arc::new(ConsoleNotifier::new())).await
    }

    /// Build the context delivering notifications to `notifier`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the storage backend
    /// cannot be opened, or the administrator cannot be seeded
    pub async fn with_notifier(
        config: &ClientConfig,
        notifier: Arc<dyn NotificationProvider>,
    ) -> AppResult<Self> {
        config.validate()?;
        let storage = create_storage(&config.storage).await?;
        let client = ApiClient::new(config.base_url.clone(), &config.http);

        let auth_provider: Arc<dyn AuthProvider> = if config.use_remote_auth {
            Arc::new(RemoteAuthProvider::new(client.clone(), Arc::clone(&storage)))
        } else {
            let local = LocalAuthProvider::new(Arc::clone(&storage));
            if let Some(password) = &config.seed_admin_password {
                local
                    .seed_admin(seed::ADMIN_USERNAME, seed::ADMIN_EMAIL, password)
                    .await?;
            }
            Arc::new(local)
        };

        let mut exercises = ExerciseService::new(Arc::clone(&storage), Arc::clone(&notifier));
        if config.use_remote_exercises {
            exercises = exercises.with_remote(Arc::new(ApiExerciseLog::new(
                client.clone(),
                Arc::clone(&auth_provider),
            )));
        }

        // Plans follow the exercise log: remote when logs are remote
        let plan_backend: Arc<dyn WorkoutPlanApi> = if config.use_remote_exercises {
            Arc::new(ApiWorkoutPlans::new(client.clone(), Arc::clone(&auth_provider)))
        } else {
            Arc::new(StoredWorkoutPlans::new(Arc::clone(&storage)))
        };
        let plans = WorkoutPlanService::new(plan_backend);

        let (admin_exercises, admin_muscle_groups) = if config.use_remote_catalog {
            let exercise_catalog: Arc<dyn ExerciseCatalog> = Arc::new(HttpExerciseCatalog::new(
                client.clone(),
                Arc::clone(&auth_provider),
            ));
            let group_catalog: Arc<dyn MuscleGroupCatalog> =
                Arc::new(HttpMuscleGroupCatalog::new(client, Arc::clone(&auth_provider)));
            (
                AdminExerciseService::new(exercise_catalog),
                AdminMuscleGroupService::new(group_catalog),
            )
        } else {
            let catalog = Arc::new(LocalCatalog::open(Arc::clone(&storage)).await?);
            let exercise_catalog: Arc<dyn ExerciseCatalog> = Arc::clone(&catalog) as _;
            let group_catalog: Arc<dyn MuscleGroupCatalog> = catalog;
            (
                AdminExerciseService::new(exercise_catalog)
                    .with_role_check(Arc::clone(&auth_provider)),
                AdminMuscleGroupService::new(group_catalog)
                    .with_role_check(Arc::clone(&auth_provider)),
            )
        };

        info!(
            storage = storage.backend_name(),
            auth = auth_provider.backend_name(),
            remote_exercises = exercises.has_remote(),
            plans = plans.backend_name(),
            remote_catalog = config.use_remote_catalog,
            "Service context ready"
        );

        let context = Self {
            config: config.clone(),
            storage,
            notifier,
            auth: AuthService::new(auth_provider),
            exercises,
            plans,
            admin_exercises,
            admin_muscle_groups,
        };
        context.sync_current_user().await;
        Ok(context)
    }

    /// Push the signed-in identity into the exercise and plan services
    ///
    /// Call after every login, registration and logout.
    pub async fn sync_current_user(&self) -> Option<User> {
        let user = self.auth.get_current_user().await;
        self.exercises.set_current_user(user.clone()).await;
        self.plans.set_current_user(user.clone()).await;
        user
    }

    /// Configuration the context was built from
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Local key-value store
    #[must_use]
    pub const fn storage(&self) -> &Arc<dyn StorageProvider> {
        &self.storage
    }

    /// Notification sink shared by the services
    #[must_use]
    pub const fn notifier(&self) -> &Arc<dyn NotificationProvider> {
        &self.notifier
    }

    /// Authentication service
    #[must_use]
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Exercise logging service
    #[must_use]
    pub const fn exercises(&self) -> &ExerciseService {
        &self.exercises
    }

    /// Workout plans of the signed-in user
    #[must_use]
    pub const fn plans(&self) -> &WorkoutPlanService {
        &self.plans
    }

    /// Catalog exercise administration
    #[must_use]
    pub const fn admin_exercises(&self) -> &AdminExerciseService {
        &self.admin_exercises
    }

    /// Muscle group administration
    #[must_use]
    pub const fn admin_muscle_groups(&self) -> &AdminMuscleGroupService {
        &self.admin_muscle_groups
    }
}
