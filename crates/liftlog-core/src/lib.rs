// ABOUTME: Core types and constants for the LiftLog workout-logging client
// ABOUTME: Foundation crate with error handling, domain models, constants and validators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Core
//!
//! Foundation crate providing shared types for the LiftLog client. It is
//! designed to change infrequently so the rest of the workspace benefits from
//! incremental compilation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Validation limits, storage keys, API paths and defaults
//! - **models**: Exercise log, auth and catalog data types
//! - **validation**: Pure, field-tagged validation rules

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (exercise logs, users, catalog)
pub mod models;

/// Pure validation rules producing field-tagged results
pub mod validation;
