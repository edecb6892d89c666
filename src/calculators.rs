// ABOUTME: Metric calculator re-exports for the LiftLog client
// ABOUTME: Volume, reps, weight and one-rep-max functions from liftlog-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_intelligence::metrics::*;
