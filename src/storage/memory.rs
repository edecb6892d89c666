// ABOUTME: In-memory storage implementation over a sorted map of JSON text
// ABOUTME: Process-lifetime store used for tests and ephemeral sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{decode, encode, StorageProvider};
use crate::errors::AppResult;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory key-value store
///
/// Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write raw text under `key` without encoding it
    ///
    /// Lets callers reproduce records that were corrupted outside this process.
    pub async fn insert_raw(&self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.write().await.insert(key.into(), text.into());
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no keys
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl StorageProvider for InMemoryStorage {
    async fn save(&self, key: &str, value: &Value) -> AppResult<()> {
        let text = encode(key, value)?;
        self.entries.write().await.insert(key.to_owned(), text);
        Ok(())
    }

    async fn load(&self, key: &str) -> AppResult<Option<Value>> {
        let guard = self.entries.read().await;
        match guard.get(key) {
            Some(text) => decode(key, text),
            None => Ok(None),
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.entries.write().await.clear();
        Ok(())
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
