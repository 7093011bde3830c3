//! # Image Transform Abstractions
//!
//! The consumed transform contract: decode, resize, and re-encode an
//! image to a target format, plus introspection and a cheap decodability
//! probe. Backends are pluggable behind [`ImageTransformer`], so the
//! engine never depends on a particular codec library.
//!
//! Resize policy for all implementations: fit inside the target bounds,
//! preserve aspect ratio, never upscale beyond the source resolution,
//! no cropping.
//!
//! # Example
//! ```rust
//! use respimg::config::variants::{FormatKind, OutputFormat};
//! use respimg::transform::transformer::{ImageTransformer, TargetSize, TransformedImage};
//! use anyhow::Result;
//!
//! struct PassThrough;
//!
//! impl ImageTransformer for PassThrough {
//!     fn transform(
//!         &self,
//!         bytes: &[u8],
//!         target: TargetSize,
//!         format: OutputFormat,
//!     ) -> Result<TransformedImage> {
//!         Ok(TransformedImage {
//!             bytes: bytes.to_vec(),
//!             format: format.kind,
//!             width: target.width,
//!             height: target.height.unwrap_or(target.width),
//!         })
//!     }
//!
//!     fn introspect(&self, _bytes: &[u8]) -> Result<respimg::transform::transformer::ImageMetadata> {
//!         anyhow::bail!("not a real decoder")
//!     }
//!
//!     fn is_decodable(&self, bytes: &[u8]) -> bool {
//!         !bytes.is_empty()
//!     }
//! }
//!
//! let t = PassThrough;
//! assert!(t.is_decodable(b"abc"));
//! ```

use anyhow::Result;

use crate::config::variants::{FormatKind, OutputFormat};

/// Target pixel size for one transform call. Height omitted means
/// "scale to fit the width, preserve aspect ratio".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: Option<u32>,
}

impl TargetSize {
    /// Width-only target.
    pub fn width(width: u32) -> Self {
        Self {
            width,
            height: None,
        }
    }

    /// Target bounded in both dimensions.
    pub fn bounded(width: u32, height: u32) -> Self {
        Self {
            width,
            height: Some(height),
        }
    }
}

/// One encoded rendition, consumed immediately by the storage write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformedImage {
    pub bytes: Vec<u8>,
    pub format: FormatKind,
    /// Actual encoded width (post-resize).
    pub width: u32,
    /// Actual encoded height (post-resize).
    pub height: u32,
}

/// Decoded facts about an input image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageMetadata {
    /// Container format, e.g. `"png"`.
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
    /// Pixel layout, e.g. `"Rgba8"`.
    pub color_type: String,
}

/// Trait defining the transform capability consumed by the engine.
pub trait ImageTransformer: Send + Sync {
    /// Decodes `bytes`, resizes to fit `target`, and re-encodes as
    /// `format`. Must never upscale beyond the source resolution.
    fn transform(
        &self,
        bytes: &[u8],
        target: TargetSize,
        format: OutputFormat,
    ) -> Result<TransformedImage>;

    /// Decodes `bytes` and reports its metadata.
    fn introspect(&self, bytes: &[u8]) -> Result<ImageMetadata>;

    /// Cheap check: does this look like a decodable image? Never errors.
    fn is_decodable(&self, bytes: &[u8]) -> bool;
}
