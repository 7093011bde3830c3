//! # Storage Abstractions
//!
//! The consumed storage contract: durable put/get/remove keyed by a
//! path-like identifier. Calls are independent; no ordering or
//! transactional guarantees across paths.
//!
//! Implementations include local filesystem storage
//! ([`LocalFileStorage`](crate::storage::local::LocalFileStorage)), the
//! map-backed [`InMemoryStorage`](crate::storage::memory::InMemoryStorage),
//! or cloud adapters (e.g. S3) supplied by the caller.
//!
//! # Example
//! ```rust
//! use anyhow::Result;
//! use async_trait::async_trait;
//! use respimg::storage::backend::StorageBackend;
//!
//! struct DevNull;
//!
//! #[async_trait]
//! impl StorageBackend for DevNull {
//!     async fn put(&self, path: &str, _bytes: &[u8]) -> Result<String> {
//!         Ok(path.to_string())
//!     }
//!     async fn get(&self, _path: &str) -> Result<Vec<u8>> {
//!         anyhow::bail!("nothing stored")
//!     }
//!     async fn remove(&self, _path: &str) -> Result<()> {
//!         Ok(())
//!     }
//! }
//! ```

use anyhow::Result;
use async_trait::async_trait;

/// A trait defining a generic durable storage backend.
///
/// Implementors persist bytes under path-like identifiers and must be
/// safely callable concurrently from multiple logical operations.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Stores `bytes` under `path`, returning the confirmed path (which
    /// may differ from `path`, e.g. an absolute filesystem location).
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<String>;

    /// Reads the bytes stored under `path`. Fails if absent.
    async fn get(&self, path: &str) -> Result<Vec<u8>>;

    /// Removes the object at `path`. Fails if absent.
    async fn remove(&self, path: &str) -> Result<()>;
}
