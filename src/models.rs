// ABOUTME: Data model re-exports for the LiftLog client
// ABOUTME: Exercise log, auth and catalog types from liftlog-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::models::*;
