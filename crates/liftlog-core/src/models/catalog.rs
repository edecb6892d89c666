// ABOUTME: Reference catalog models: muscle groups and catalog exercises
// ABOUTME: Admin-managed master data with request shapes for create and update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A muscle group of the reference catalog
///
/// `name` is the natural key: unique case-insensitively and stored upper case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleGroup {
    /// Catalog identifier
    pub id: i64,
    /// Upper-case name, e.g. `CHEST`
    pub name: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Create or update payload for a muscle group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleGroupRequest {
    /// Desired name; normalized to upper case before it is written
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MuscleGroupRequest {
    /// Create a request
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}

/// An exercise of the reference catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogExercise {
    /// Catalog identifier
    pub id: i64,
    /// Exercise name
    pub name: String,
    /// Name of the muscle group the exercise trains
    pub group: String,
}

/// Create or update payload for a catalog exercise
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogExerciseRequest {
    /// Exercise name
    pub name: String,
    /// Muscle group name
    pub group: String,
}

impl CatalogExerciseRequest {
    /// Create a request
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
        }
    }
}
