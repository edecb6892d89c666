// ABOUTME: Constants re-exports for the LiftLog client
// ABOUTME: Limits, storage keys, API paths, messages and defaults from liftlog-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::constants::*;
