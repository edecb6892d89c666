// ABOUTME: Validation re-exports for the LiftLog client
// ABOUTME: Field-tagged exercise, credential and catalog rules from liftlog-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::validation::*;
