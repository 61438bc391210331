use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Key-value store operation error.
///
/// Infrastructure failures only (IO, lock, decode at the storage layer).
/// Domain code treats a failed `get` as "no data" and a failed `set` as
/// best-effort; nothing here is surfaced to a user.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Generic asynchronous string-keyed durable storage.
///
/// The narrow surface the inventory service persists through. No storage
/// assumptions: works with an in-memory map (tests/dev) and a JSON file on
/// disk (local single-user durability). Implementations must not panic on
/// internal failure; they report it as a [`StorageError`] and the caller
/// decides whether to swallow it.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key` (full replacement, no merge).
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[async_trait]
impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }
}
