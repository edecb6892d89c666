// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Validation limits, storage keys, API paths and defaults for the LiftLog client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Validation limits for logged sets and catalog entries
pub mod limits {
    /// Heaviest accepted weight for a single set, in kilograms
    pub const MAX_WEIGHT_KG: f64 = 1000.0;
    /// Most repetitions accepted for a single set
    pub const MAX_REPS: u32 = 1000;
    /// Most sets accepted in one log entry
    pub const MAX_SETS: usize = 50;
    /// Longest accepted exercise name, in characters
    pub const MAX_EXERCISE_NAME_LENGTH: usize = 100;
    /// Longest accepted muscle group name, in characters
    pub const MAX_MUSCLE_GROUP_NAME_LENGTH: usize = 100;
    /// Longest accepted muscle group description, in characters
    pub const MAX_MUSCLE_GROUP_DESCRIPTION_LENGTH: usize = 255;
    /// Shortest accepted password, in characters
    pub const MIN_PASSWORD_LENGTH: usize = 8;
    /// Shortest accepted username, in characters
    pub const MIN_USERNAME_LENGTH: usize = 3;
    /// Longest accepted username, in characters
    pub const MAX_USERNAME_LENGTH: usize = 20;
    /// Longest accepted workout plan name, in characters
    pub const MAX_PLAN_NAME_LENGTH: usize = 100;
    /// Longest accepted workout day description, in characters
    pub const MAX_PLAN_DAY_DESCRIPTION_LENGTH: usize = 255;
    /// Longest plan, counted in its duration unit
    pub const MAX_PLAN_DURATION: u32 = 52;
    /// Most training days in one plan
    pub const MAX_PLAN_DAYS: usize = 14;
    /// Most target sets for one exercise of a workout day
    pub const MAX_TARGET_SETS: u32 = 20;
}

/// Key-value store keys
///
/// The `exercise_` prefix is load-bearing: enumeration and bulk delete of
/// logged exercises rely on it.
pub mod storage_keys {
    /// Prefix of every locally stored exercise log entry
    pub const EXERCISE_PREFIX: &str = "exercise_";
    /// User table of the local auth backend
    pub const LOCAL_USERS: &str = "local_users";
    /// Session token of the local auth backend
    pub const LOCAL_AUTH_TOKEN: &str = "local_auth_token";
    /// Signed-in user of the local auth backend
    pub const LOCAL_CURRENT_USER: &str = "local_current_user";
    /// Muscle groups and exercises of the local reference catalog
    pub const LOCAL_CATALOG: &str = "local_catalog";
    /// Prefix of a user's locally stored workout plans, followed by the user id
    pub const WORKOUT_PLANS_PREFIX: &str = "workout_plans_";
    /// Session token returned by the remote backend
    pub const REMOTE_AUTH_TOKEN: &str = "auth_token";
    /// Signed-in user returned by the remote backend
    pub const REMOTE_CURRENT_USER: &str = "current_user";
}

/// Remote API paths, relative to the configured base URL
pub mod api_paths {
    /// Registration endpoint
    pub const REGISTER: &str = "/api/v1/users/register";
    /// Login endpoint
    pub const LOGIN: &str = "/api/v1/users/login";
    /// Users collection; exercise logs live under `/{user_id}/logs`
    pub const USERS: &str = "/api/v1/users";
    /// Admin exercise catalog
    pub const ADMIN_EXERCISES: &str = "/api/v1/admin/exercises";
    /// Admin muscle groups
    pub const ADMIN_MUSCLE_GROUPS: &str = "/api/v1/admin/muscle-groups";
    /// Public muscle group listing
    pub const MUSCLE_GROUPS: &str = "/api/v1/muscle-groups";
    /// Public exercise catalog listing
    pub const EXERCISES: &str = "/api/v1/exercises";
    /// Path segment of a user's workout plans under [`USERS`]
    pub const WORKOUT_PLANS: &str = "workout-plans";
}

/// User-facing messages shared by validators, backends and services
pub mod messages {
    /// Prefix for rejected input
    pub const VALIDATION_FAILED: &str = "Validation failed: ";
    /// Prefix for a failed exercise save
    pub const SAVE_EXERCISE_FAILED: &str = "Failed to save exercise: ";
    /// Prefix for a failed exercise delete
    pub const DELETE_EXERCISE_FAILED: &str = "Failed to delete exercise: ";
    /// Prefix for a failed bulk delete
    pub const CLEAR_EXERCISES_FAILED: &str = "Failed to clear exercises: ";
    /// Prefix for a failed latest-log lookup
    pub const LATEST_LOG_FAILED: &str = "Failed to fetch latest log: ";
    /// Prefix for a failed plan create or update
    pub const SAVE_PLAN_FAILED: &str = "Failed to save workout plan: ";
    /// Prefix for a failed plan listing or lookup
    pub const LOAD_PLANS_FAILED: &str = "Failed to load workout plans: ";
    /// Prefix for a failed plan delete
    pub const DELETE_PLAN_FAILED: &str = "Failed to delete workout plan: ";
    /// Prefix for a failed login
    pub const LOGIN_FAILED: &str = "Login failed: ";
    /// Prefix for a failed registration
    pub const REGISTRATION_FAILED: &str = "Registration failed: ";
    /// Prefix for a failed logout
    pub const LOGOUT_FAILED: &str = "Logout failed: ";
    /// Prefix for a failed session check
    pub const AUTH_CHECK_FAILED: &str = "Auth check failed: ";
    /// Rejected credentials
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
    /// Duplicate registration
    pub const EMAIL_TAKEN: &str = "User with this email already exists";
    /// Role denial from the admin endpoints
    pub const ADMIN_REQUIRED: &str = "Access denied. Admin role required.";
    /// Denial from the per-user endpoints
    pub const ACCESS_DENIED: &str = "Access denied";
    /// Remote call attempted without a session token
    pub const NO_AUTH_TOKEN: &str = "No authentication token";
    /// Duplicate muscle group name
    pub const MUSCLE_GROUP_EXISTS: &str = "Muscle group with this name already exists";
    /// Duplicate catalog exercise name
    pub const EXERCISE_EXISTS: &str = "Exercise with this name already exists";
    /// Delete of a muscle group still used by the exercise catalog
    pub const MUSCLE_GROUP_REFERENCED: &str =
        "Cannot delete muscle group because it is referenced by exercises";
}

/// Default configuration values
pub mod defaults {
    /// Base URL of the remote backend
    pub const API_BASE_URL: &str = "http://localhost:8080/exercise-logging";
    /// Whole-request timeout for remote calls
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Connect timeout for remote calls
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// File name of the file-backed store inside the data directory
    pub const STORE_FILE_NAME: &str = "store.json";
    /// Data directory name under the platform data dir
    pub const DATA_DIR_NAME: &str = "liftlog";
    /// Capacity of the broadcast notification channel
    pub const NOTIFICATION_CHANNEL_CAPACITY: usize = 64;
    /// Target sets of a newly added plan exercise
    pub const TARGET_SETS: u32 = 3;
    /// Lower rep target of a newly added plan exercise
    pub const TARGET_MIN_REPS: u32 = 8;
    /// Upper rep target of a newly added plan exercise
    pub const TARGET_MAX_REPS: u32 = 12;
}

/// Seed data of the local backends
pub mod seed {
    /// Username of the seeded local administrator
    pub const ADMIN_USERNAME: &str = "admin";
    /// Email of the seeded local administrator
    pub const ADMIN_EMAIL: &str = "admin@exercises.com";

    /// Muscle groups present in a fresh local catalog, with descriptions
    pub const MUSCLE_GROUPS: &[(&str, &str)] = &[
        ("CHEST", "Chest exercises for pectoral muscles"),
        ("BACK", "Back exercises for latissimus dorsi"),
        ("SHOULDERS", "Shoulder exercises for deltoid muscles"),
        ("LEGS", "Leg exercises for quadriceps and hamstrings"),
        ("BICEPS", "Bicep exercises for biceps brachii"),
        ("TRICEPS", "Tricep exercises for triceps brachii"),
    ];

    /// Exercises present in a fresh local catalog, as `(name, muscle group)`
    pub const EXERCISES: &[(&str, &str)] = &[
        ("Bench Press", "CHEST"),
        ("Squat", "LEGS"),
        ("Deadlift", "BACK"),
    ];
}
