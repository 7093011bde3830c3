//! # Variant Generation Engine
//!
//! Orchestrates validation, the decodability probe, the original
//! upload, and the per-combination transform/store loop across the
//! configured `sizes × formats × DPR ratios` space.
//!
//! Failure policy is asymmetric on purpose: the original upload is the
//! source of truth, so validation failures and a failed original write
//! abort the whole call. Individual variant combinations are
//! best-effort — a failed tuple is logged and skipped, never aborting
//! its siblings, and shows up only as an omission in the result.
//!
//! The transform target for each tuple is the *effective* size
//! (nominal × DPR); the variant filename records the *nominal* width
//! with the DPR in the `@Nx` suffix, so names describe logical
//! CSS-pixel widths for `srcset`-style consumption.
//!
//! # Example
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use respimg::pipeline::engine::VariantEngine;
//! use respimg::storage::memory::InMemoryStorage;
//! use respimg::transform::image_rs::ImageRsTransformer;
//!
//! # async fn run() -> Result<(), respimg::error::PipelineError> {
//! let engine = VariantEngine::new(
//!     Arc::new(ImageRsTransformer::default()),
//!     Arc::new(InMemoryStorage::new()),
//! );
//!
//! let bytes = std::fs::read("pic.jpg").unwrap();
//! let result = engine
//!     .process_image(&bytes, "pic.jpg", Some("image/jpeg"), Some(10 * 1024 * 1024))
//!     .await?;
//! for (format, paths) in &result.generated {
//!     println!("{format}: {} variants", paths.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, RwLock};

use anyhow::Context;
use tracing::{debug, warn};

use super::result::ProcessingResult;
use crate::config::pipeline::PipelineConfig;
use crate::config::variants::{OutputFormat, VariantConfig, VariantSize};
use crate::error::PipelineError;
use crate::naming::{self, DEFAULT_ORIGINALS_BASE};
use crate::storage::backend::StorageBackend;
use crate::transform::transformer::{ImageTransformer, TargetSize};
use crate::validate;

/// The variant generation engine.
///
/// Cheap to clone; clones share the transform/storage backends and the
/// active configuration.
#[derive(Clone)]
pub struct VariantEngine {
    transformer: Arc<dyn ImageTransformer>,
    storage: Arc<dyn StorageBackend>,
    config: Arc<RwLock<VariantConfig>>,
    originals_base: String,
}

impl VariantEngine {
    /// Engine with the default variant profile and originals base path.
    pub fn new(transformer: Arc<dyn ImageTransformer>, storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            transformer,
            storage,
            config: Arc::new(RwLock::new(VariantConfig::default())),
            originals_base: DEFAULT_ORIGINALS_BASE.to_string(),
        }
    }

    /// Engine with an explicit variant profile and runtime settings.
    pub fn with_config(
        transformer: Arc<dyn ImageTransformer>,
        storage: Arc<dyn StorageBackend>,
        config: VariantConfig,
        pipeline: &PipelineConfig,
    ) -> Self {
        Self {
            transformer,
            storage,
            config: Arc::new(RwLock::new(config)),
            originals_base: pipeline.originals_base.clone(),
        }
    }

    /// Snapshot of the active configuration.
    pub fn config(&self) -> VariantConfig {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replaces the active configuration.
    ///
    /// Safe between calls: in-flight `process_image` invocations keep
    /// the snapshot they took at entry. For a per-call override under
    /// concurrency, pass the configuration explicitly to
    /// [`process_image_with`](Self::process_image_with) instead of
    /// swapping shared state around a call.
    pub fn update_config(&self, config: VariantConfig) {
        match self.config.write() {
            Ok(mut guard) => *guard = config,
            Err(poisoned) => *poisoned.into_inner() = config,
        }
    }

    /// Processes one upload against the engine's active configuration.
    ///
    /// The configuration is snapshotted once at entry, so a concurrent
    /// [`update_config`](Self::update_config) never changes the
    /// combination space mid-call.
    pub async fn process_image(
        &self,
        bytes: &[u8],
        filename: &str,
        mime: Option<&str>,
        max_bytes: Option<u64>,
    ) -> Result<ProcessingResult, PipelineError> {
        let snapshot = self.config();
        self.process_image_with(&snapshot, bytes, filename, mime, max_bytes)
            .await
    }

    /// Processes one upload against an explicit configuration.
    ///
    /// Fatal failures (`Err`): validation, an undecodable payload, or a
    /// failed original upload. Per-tuple variant failures are absorbed:
    /// the tuple is logged via `tracing::warn!` and omitted from the
    /// result, which still carries one (possibly empty) list per
    /// configured format.
    pub async fn process_image_with(
        &self,
        config: &VariantConfig,
        bytes: &[u8],
        filename: &str,
        mime: Option<&str>,
        max_bytes: Option<u64>,
    ) -> Result<ProcessingResult, PipelineError> {
        validate::check_all(bytes, filename, mime, max_bytes)?;

        // Extension and MIME type can lie about the actual content.
        if !self.transformer.is_decodable(bytes) {
            return Err(PipelineError::processing("invalid image"));
        }

        // The original must be durable before any derived work starts.
        let original_path = naming::original_path(filename, &self.originals_base);
        let original = self
            .storage
            .put(&original_path, bytes)
            .await
            .map_err(|e| {
                PipelineError::storage_with(format!("storing original at {original_path}"), e)
            })?;
        debug!(original = %original, "stored original upload");

        let sizes = config.sizes();
        let formats = config.formats();
        let dpr_ratios = config.dpr_ratios();

        let mut result = ProcessingResult::seeded(original, formats.iter().map(|f| f.kind));

        for &size in &sizes {
            for &format in &formats {
                for &dpr in &dpr_ratios {
                    match self.generate_variant(bytes, filename, size, format, dpr).await {
                        Ok(path) => {
                            result
                                .generated
                                .entry(format.kind.as_str().to_string())
                                .or_default()
                                .push(path);
                        }
                        Err(e) => {
                            warn!(
                                width = size.width,
                                format = %format.kind,
                                dpr,
                                error = %format!("{e:#}"),
                                "variant generation failed; skipping combination"
                            );
                        }
                    }
                }
            }
        }

        debug!(
            variants = result.variant_count(),
            expected = config.combination_count(),
            "variant generation settled"
        );
        Ok(result)
    }

    /// Reads stored bytes, wrapping any backend failure as
    /// [`PipelineError::StorageFailed`].
    pub async fn get_image(&self, path: &str) -> Result<Vec<u8>, PipelineError> {
        self.storage
            .get(path)
            .await
            .map_err(|e| PipelineError::storage_with(format!("reading {path}"), e))
    }

    /// Deletes a stored object, wrapping any backend failure as
    /// [`PipelineError::StorageFailed`].
    pub async fn delete_image(&self, path: &str) -> Result<(), PipelineError> {
        self.storage
            .remove(path)
            .await
            .map_err(|e| PipelineError::storage_with(format!("deleting {path}"), e))
    }

    /// Transform + store for one (size, format, dpr) tuple. The target
    /// is the effective (DPR-scaled) size; the stored name carries the
    /// nominal width.
    async fn generate_variant(
        &self,
        bytes: &[u8],
        filename: &str,
        size: VariantSize,
        format: OutputFormat,
        dpr: f64,
    ) -> anyhow::Result<String> {
        let target = TargetSize {
            width: scale(size.width, dpr),
            height: size.height.map(|h| scale(h, dpr)),
        };
        let variant = self
            .transformer
            .transform(bytes, target, format)
            .context("transform")?;

        let name = naming::variant_name(filename, size.width, format.kind, dpr);
        self.storage
            .put(&name, &variant.bytes)
            .await
            .with_context(|| format!("store {name}"))
    }
}

/// Effective pixel dimension for a DPR multiplier, rounded to the
/// nearest pixel and never below 1.
fn scale(nominal: u32, dpr: f64) -> u32 {
    (nominal as f64 * dpr).round().max(1.0) as u32
}
