// ABOUTME: Helper modules for the liftlog CLI
// ABOUTME: Output formatting and argument parsing utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod parse;
