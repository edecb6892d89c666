// ABOUTME: Core data models for the LiftLog workout-logging client
// ABOUTME: Re-exports exercise log, auth and catalog types shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain serializable data shared by validators, calculators, ports and
//! services. Field names serialize in camelCase so stored records and remote
//! payloads use the same JSON shape.
//!
//! ## Core Models
//!
//! - `ExerciseLogEntry`: one logged exercise with its ordered sets
//! - `User` / `AuthSession`: identity, role and session token
//! - `MuscleGroup` / `CatalogExercise`: admin-managed reference catalog
//! - `WorkoutPlan`: a user's training plan with days and exercise targets

mod auth;
mod catalog;
mod exercise;
mod plan;

// Exercise log domain
pub use exercise::{Exercise, ExerciseLogEntry, ExerciseSet, ExerciseStats};

// Auth domain
pub use auth::{AuthSession, LoginCredentials, RegisterCredentials, User, UserRole};

// Catalog domain
pub use catalog::{CatalogExercise, CatalogExerciseRequest, MuscleGroup, MuscleGroupRequest};

// Workout plan domain
pub use plan::{DurationUnit, ExerciseTarget, TargetExercise, WorkoutDay, WorkoutPlan};
