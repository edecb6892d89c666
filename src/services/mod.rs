// ABOUTME: Orchestration services composing validators, formatters and ports
// ABOUTME: Result-based API for the UI layer, independent of local or remote backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Every operation follows the same path: validate the input and reject it
//! before any port sees it, transform it with the pure formatters and
//! calculators, then call the port. Business failures reported by a port
//! (bad credentials, not found, conflict, permission denied) are returned
//! unchanged. Infrastructure failures (storage, serialization, network) are
//! re-wrapped with a stable prefix naming the failed operation.

/// Catalog administration: exercises and muscle groups
pub mod admin;
/// Sign-in, registration and session queries
pub mod auth;
/// Exercise logging, history and statistics
pub mod exercise;
/// Workout plans of the signed-in user
pub mod plans;

pub use admin::{AdminExerciseService, AdminMuscleGroupService};
pub use auth::AuthService;
pub use exercise::{ExerciseService, StoredExercise};
pub use plans::WorkoutPlanService;

use crate::errors::AppError;
use tracing::warn;

/// Prefix infrastructure failures with `prefix`; business failures pass through
pub(crate) fn wrap_port_failure(error: AppError, prefix: &str) -> AppError {
    if error.is_port_failure() {
        warn!(operation = %prefix.trim_end(), code = ?error.code, message = %error.message, "Port failure");
        error.with_prefix(prefix)
    } else {
        error
    }
}
