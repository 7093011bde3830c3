//! # Local File Storage
//!
//! [`StorageBackend`] implementation on the local filesystem.
//!
//! - parent directories are created automatically,
//! - relative paths are sanitized (no `..` traversal),
//! - all paths land under a configured root directory.
//!
//! Commonly used for local development or single-host deployments.
//!
//! # Example
//! ```rust,no_run
//! use respimg::storage::backend::StorageBackend;
//! use respimg::storage::local::LocalFileStorage;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let storage = LocalFileStorage::new("/tmp/uploads");
//! let abs = storage.put("images/avatar.png", b"binary").await?;
//! let back = storage.get("images/avatar.png").await?;
//! assert_eq!(back, b"binary");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use super::backend::StorageBackend;

/// Stores objects on the local filesystem under a root directory.
#[derive(Clone, Debug)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    /// Creates a new [`LocalFileStorage`] rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Returns the configured root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a storage path onto the filesystem: trims leading slashes
    /// and replaces `..` to block directory traversal.
    fn resolve(&self, path: &str) -> PathBuf {
        let safe = path.trim_start_matches('/').replace("..", "_");
        self.root.join(safe)
    }
}

#[async_trait]
impl StorageBackend for LocalFileStorage {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String> {
        let full = self.resolve(path);
        if let Some(dir) = full.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create dir {dir:?}"))?;
        }
        fs::write(&full, bytes)
            .await
            .with_context(|| format!("write {full:?}"))?;
        Ok(full.to_string_lossy().into_owned())
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.resolve(path);
        fs::read(&full)
            .await
            .with_context(|| format!("read {full:?}"))
    }

    async fn remove(&self, path: &str) -> Result<()> {
        let full = self.resolve(path);
        fs::remove_file(&full)
            .await
            .with_context(|| format!("remove {full:?}"))
    }
}
