// ABOUTME: JSON-file-backed storage implementation that survives restarts
// ABOUTME: Keeps the map in memory and rewrites the file atomically on every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{decode, encode, StorageProvider};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

/// Key-value store persisted as one JSON object of `key -> JSON text`
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open the store at `path`, creating parent directories as needed
    ///
    /// A missing file opens as an empty store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created or the file
    /// cannot be read, and `SerializationError` if the file is not a JSON
    /// object of strings
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::storage(format!(
                        "Failed to create data directory {}: {e}",
                        parent.display()
                    ))
                    .with_source(e)
                })?;
            }
        }

        let entries = match fs::read_to_string(&path).await {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                AppError::serialization(format!(
                    "Store file {} is not a valid key-value document: {e}",
                    path.display()
                ))
                .with_source(e)
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(AppError::from(e).with_resource_id(path.display().to_string())),
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened file storage");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write raw text under `key` without encoding it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be rewritten
    pub async fn insert_raw(&self, key: impl Into<String>, text: impl Into<String>) -> AppResult<()> {
        let key = key.into();
        let text = text.into();
        self.commit(|entries| {
            entries.insert(key, text);
            true
        })
        .await
    }

    /// Apply `change` to a copy of the map and swap it in once the file is written
    ///
    /// `change` returns whether it modified anything; unchanged maps skip the write.
    async fn commit<F>(&self, change: F) -> AppResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool + Send,
    {
        let mut guard = self.entries.write().await;
        let mut next = guard.clone();
        if !change(&mut next) {
            return Ok(());
        }
        self.persist(&next).await?;
        *guard = next;
        Ok(())
    }

    /// Rewrite the backing file through a temporary sibling and rename
    async fn persist(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let document = serde_json::to_string_pretty(entries)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, document).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", temp_path.display())).with_source(e)
        })?;
        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            AppError::storage(format!("Failed to replace {}: {e}", self.path.display()))
                .with_source(e)
        })
    }
}

#[async_trait]
impl StorageProvider for FileStorage {
    async fn save(&self, key: &str, value: &Value) -> AppResult<()> {
        let text = encode(key, value)?;
        self.commit(|entries| {
            entries.insert(key.to_owned(), text);
            true
        })
        .await
    }

    async fn load(&self, key: &str) -> AppResult<Option<Value>> {
        let guard = self.entries.read().await;
        match guard.get(key) {
            Some(text) => decode(key, text),
            None => Ok(None),
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.commit(|entries| entries.remove(key).is_some()).await
    }

    async fn clear(&self) -> AppResult<()> {
        self.commit(|entries| {
            entries.clear();
            true
        })
        .await
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
