//! # respimg
//!
//! Responsive image variant pipeline: derive multiple renditions of an
//! uploaded image (varying width, encoded format, and device-pixel-ratio
//! multiplier) and persist each one through a pluggable storage backend.
//!
//! This crate provides:
//! - Deterministic variant/original naming (`naming`)
//! - Upload pre-validation (`validate`)
//! - The transform and storage capability seams (`transform`, `storage`)
//! - The orchestrating engine and its result shape (`pipeline`)
//! - Variant and runtime configuration (`config`)
//!
//! ## Example
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use respimg::pipeline::engine::VariantEngine;
//! use respimg::storage::local::LocalFileStorage;
//! use respimg::transform::image_rs::ImageRsTransformer;
//!
//! # async fn run() -> Result<(), respimg::error::PipelineError> {
//! let engine = VariantEngine::new(
//!     Arc::new(ImageRsTransformer::default()),
//!     Arc::new(LocalFileStorage::new("/var/www/uploads")),
//! );
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let result = engine
//!     .process_image(&bytes, "photo.jpg", Some("image/jpeg"), None)
//!     .await?;
//!
//! println!("original stored at {}", result.original);
//! # Ok(())
//! # }
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use async_trait;
pub use image;
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tokio;
pub use tracing;
pub use uuid;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod storage;
pub mod transform;
pub mod validate;
