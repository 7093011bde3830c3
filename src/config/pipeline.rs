//! # Pipeline Runtime Configuration
//!
//! Runtime settings for the upload pipeline: where originals live, the
//! local storage root, and the default upload size ceiling. Loadable
//! from the environment for deployments that configure through env vars.
//!
//! # Example
//! ```rust
//! use respimg::config::pipeline::PipelineConfig;
//!
//! let cfg = PipelineConfig::default();
//! assert_eq!(cfg.originals_base, "/uploads/originals");
//! assert_eq!(cfg.max_upload_bytes, 10 * 1024 * 1024);
//! ```

use std::path::PathBuf;

use super::env::{read_string, read_u32_list, read_u64};
use super::variants::{VariantConfig, VariantSize};
use crate::naming::DEFAULT_ORIGINALS_BASE;

/// Environment variable naming the local storage root.
pub const ENV_UPLOAD_ROOT: &str = "RESPIMG_UPLOAD_ROOT";
/// Environment variable naming the originals base path.
pub const ENV_ORIGINALS_BASE: &str = "RESPIMG_ORIGINALS_BASE";
/// Environment variable naming the upload size ceiling in bytes.
pub const ENV_MAX_UPLOAD_BYTES: &str = "RESPIMG_MAX_UPLOAD_BYTES";
/// Environment variable naming the comma-separated variant widths.
pub const ENV_VARIANT_WIDTHS: &str = "RESPIMG_VARIANT_WIDTHS";

/// Runtime configuration for the pipeline surrounding the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Root directory for [`LocalFileStorage`](crate::storage::local::LocalFileStorage).
    pub upload_root: PathBuf,
    /// Base path under which originals are stored.
    pub originals_base: String,
    /// Ceiling callers pass to `process_image` as `max_bytes`.
    pub max_upload_bytes: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            upload_root: PathBuf::from("./uploads"),
            originals_base: DEFAULT_ORIGINALS_BASE.to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl PipelineConfig {
    /// Loads the configuration from the environment, falling back to
    /// defaults for unset or unparseable variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            upload_root: PathBuf::from(read_string(
                ENV_UPLOAD_ROOT,
                &defaults.upload_root.to_string_lossy(),
            )),
            originals_base: read_string(ENV_ORIGINALS_BASE, &defaults.originals_base),
            max_upload_bytes: read_u64(ENV_MAX_UPLOAD_BYTES, defaults.max_upload_bytes),
        }
    }
}

/// Builds a [`VariantConfig`] whose widths come from
/// [`ENV_VARIANT_WIDTHS`] (comma-separated), keeping the default format
/// and DPR axes.
pub fn variant_config_from_env() -> VariantConfig {
    let defaults = VariantConfig::default();
    let default_widths: Vec<u32> = defaults.sizes().iter().map(|s| s.width).collect();
    let widths = read_u32_list(ENV_VARIANT_WIDTHS, &default_widths);
    let sizes: Vec<VariantSize> = widths.into_iter().map(VariantSize::width).collect();

    let mut config = defaults;
    config.set_sizes(&sizes);
    config
}
