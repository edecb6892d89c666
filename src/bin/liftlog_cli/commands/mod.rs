// ABOUTME: Command modules for the liftlog CLI
// ABOUTME: Session, exercise log, catalog and workout plan commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod log;
pub mod plans;
pub mod session;
