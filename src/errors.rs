// ABOUTME: Error handling re-exports for the LiftLog client
// ABOUTME: AppError, ErrorCode and AppResult live in the liftlog-core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Re-export of the unified error types so callers can `use liftlog::errors`.

pub use liftlog_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
