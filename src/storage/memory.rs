//! # In-Memory Storage
//!
//! Map-backed [`StorageBackend`] for tests, examples, and ephemeral
//! deployments. Paths are stored verbatim; the confirmed path equals
//! the requested path.
//!
//! # Example
//! ```rust
//! use respimg::storage::backend::StorageBackend;
//! use respimg::storage::memory::InMemoryStorage;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let storage = InMemoryStorage::new();
//! storage.put("pic_320w@1x.webp", b"bytes").await?;
//! assert!(storage.contains("pic_320w@1x.webp"));
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use super::backend::StorageBackend;

/// Stores objects in a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether an object exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.lock().contains_key(path)
    }

    /// Stored paths, sorted for deterministic assertions.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.lock().keys().cloned().collect();
        paths.sort();
        paths
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl StorageBackend for InMemoryStorage {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String> {
        self.lock().insert(path.to_string(), bytes.to_vec());
        Ok(path.to_string())
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        match self.lock().get(path) {
            Some(bytes) => Ok(bytes.clone()),
            None => bail!("not found: {path}"),
        }
    }

    async fn remove(&self, path: &str) -> Result<()> {
        if self.lock().remove(path).is_none() {
            bail!("not found: {path}");
        }
        Ok(())
    }
}
