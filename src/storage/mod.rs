// ABOUTME: Key-value storage port for locally persisted client data
// ABOUTME: Pluggable backends (in-memory, JSON file) behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage Port
//!
//! A string-keyed store of JSON values. Backends hold each value as its JSON
//! text, the way a browser key-value store would, so a record can be corrupt
//! on disk independently of its neighbours. Loading corrupt text fails with
//! `SerializationError` for that key only.

/// Storage factory for creating storage providers from configuration
pub mod factory;
/// JSON-file-backed storage implementation
pub mod file;
/// In-memory storage implementation
pub mod memory;

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Storage provider trait for pluggable backend implementations
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded or the backend write fails
    async fn save(&self, key: &str, value: &Value) -> AppResult<()>;

    /// Load the value under `key`; `None` when absent or empty
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the stored text is not valid JSON, or
    /// `StorageError` if the backend read fails
    async fn load(&self, key: &str) -> AppResult<Option<Value>>;

    /// Remove `key`; removing a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Remove every key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails
    async fn clear(&self) -> AppResult<()>;

    /// All keys in ascending order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails
    async fn keys(&self) -> AppResult<Vec<String>>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Serialize `value` and store it under `key`
///
/// # Errors
///
/// Returns `SerializationError` when `value` cannot be represented as JSON,
/// or any error of the backend write
pub async fn save_json<T>(storage: &dyn StorageProvider, key: &str, value: &T) -> AppResult<()>
where
    T: Serialize + Sync + ?Sized,
{
    let value = serde_json::to_value(value).map_err(|e| {
        AppError::serialization(format!("Failed to save data to storage: {e}"))
            .with_resource_id(key)
            .with_source(e)
    })?;
    storage.save(key, &value).await
}

/// Load the value under `key` and decode it as `T`
///
/// # Errors
///
/// Returns `SerializationError` when the stored value does not decode as `T`,
/// or any error of the backend read
pub async fn load_json<T>(storage: &dyn StorageProvider, key: &str) -> AppResult<Option<T>>
where
    T: DeserializeOwned,
{
    storage
        .load(key)
        .await?
        .map(|value| {
            serde_json::from_value(value).map_err(|e| {
                AppError::serialization(format!("Failed to load data from storage: {e}"))
                    .with_resource_id(key)
                    .with_source(e)
            })
        })
        .transpose()
}

/// Encode a value as the JSON text a backend stores
pub(crate) fn encode(key: &str, value: &Value) -> AppResult<String> {
    serde_json::to_string(value).map_err(|e| {
        AppError::serialization(format!("Failed to save data to storage: {e}"))
            .with_resource_id(key)
            .with_source(e)
    })
}

/// Decode stored JSON text; empty text reads as absent
pub(crate) fn decode(key: &str, text: &str) -> AppResult<Option<Value>> {
    if text.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text).map(Some).map_err(|e| {
        AppError::serialization(format!("Failed to load data from storage: {e}"))
            .with_resource_id(key)
            .with_source(e)
    })
}
