//! File-backed key-value store for local single-user durability.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;

use crate::kv::{KeyValueStore, StorageError};

/// Single JSON file holding the whole key→value map.
///
/// Read and rewritten whole on every operation. That is fine at this scale
/// (one key, one small array) and keeps the format inspectable; it is not
/// safe under concurrent writers, which are out of scope.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file (and its parent directory)
    /// is created lazily on first write; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn read_map(&self) -> anyhow::Result<HashMap<String, String>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()));
            }
        };
        serde_json::from_slice(&bytes)
            .with_context(|| format!("failed to decode {}", self.path.display()))
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let bytes = serde_json::to_vec_pretty(map).context("failed to encode store contents")?;
        tokio::fs::write(&self.path, bytes)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self
            .read_map()
            .await
            .map_err(|e| StorageError::backend(format!("{e:#}")))?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self
            .read_map()
            .await
            .map_err(|e| StorageError::backend(format!("{e:#}")))?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
            .await
            .map_err(|e| StorageError::backend(format!("{e:#}")))
    }
}
