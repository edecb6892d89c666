// ABOUTME: Main library entry point for the LiftLog workout-logging client
// ABOUTME: Services, ports and backends that run the same rules against local or remote data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog
//!
//! The domain and service layer of a workout-logging client: users
//! authenticate, log exercises with sets, reps and weight, browse their
//! history, plan training blocks, and (as admins) manage a reference
//! catalog of exercises and muscle groups.
//!
//! ## Architecture
//!
//! ```text
//! caller -> service.operation(input) -> validator -> formatter/calculator -> port -> AppResult<T>
//! ```
//!
//! - **Ports**: `storage`, `auth`, `notifications`, `exercise_log`,
//!   `workout_plan` and `catalog` define async traits, each with a local
//!   and a remote backend
//! - **Services**: `ExerciseService`, `AuthService`, `WorkoutPlanService`
//!   and the admin services
//!   compose validators, formatters and calculators with a port
//! - **Context**: `ServiceContext` wires everything once from a `ClientConfig`
//!
//! Validators, calculators and data models live in the `liftlog-core` and
//! `liftlog-intelligence` workspace crates and are re-exported here.

/// Error types, re-exported from `liftlog-core`
pub mod errors;

/// Constants, re-exported from `liftlog-core`
pub mod constants;

/// Data models, re-exported from `liftlog-core`
pub mod models;

/// Validation rules, re-exported from `liftlog-core`
pub mod validation;

/// Metric calculators, re-exported from `liftlog-intelligence`
pub mod calculators;

/// Timestamp, volume and exercise-entry formatting
pub mod formatters;

/// Key-value storage port with in-memory and file-backed backends
pub mod storage;

/// Notification port with tracing and broadcast backends
pub mod notifications;

/// Shared HTTP client for the remote backends
pub mod http_client;

/// Authentication port with local and remote backends
pub mod auth;

/// Remote exercise-log adapter
pub mod exercise_log;

/// Reference catalog ports with local and remote backends
pub mod catalog;

/// Workout plan port with local and remote backends
pub mod workout_plan;

/// Orchestration services exposed to the UI layer
pub mod services;

/// Client configuration resolved from the environment
pub mod config;

/// Composition root wiring ports and services from configuration
pub mod context;

/// Logging configuration and structured logging helpers
pub mod logging;
