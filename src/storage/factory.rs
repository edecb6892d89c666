// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Builds the in-memory or JSON-file store behind the StorageProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::file::FileStorage;
use super::memory::InMemoryStorage;
use super::StorageProvider;
use crate::config::StorageBackend;
use crate::errors::AppResult;
use std::sync::Arc;
use tracing::info;

/// Create the storage provider selected by `backend`
///
/// # Errors
///
/// Returns an error if the file-backed store cannot be opened
pub async fn create_storage(backend: &StorageBackend) -> AppResult<Arc<dyn StorageProvider>> {
    match backend {
        StorageBackend::Memory => {
            info!("Initializing in-memory storage");
            Ok(Arc::new(InMemoryStorage::new()))
        }
        StorageBackend::File { path } => {
            info!(path = %path.display(), "Initializing file storage");
            Ok(Arc::new(FileStorage::open(path.clone()).await?))
        }
    }
}
