// ABOUTME: Configuration module for the LiftLog client
// ABOUTME: Backend switches, API base URL, storage location and HTTP timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is resolved once at startup into a [`ClientConfig`] and
//! passed down explicitly. Services never read the environment themselves.

/// Environment-driven client configuration
pub mod environment;

pub use environment::{ClientConfig, HttpClientConfig, StorageBackend};
