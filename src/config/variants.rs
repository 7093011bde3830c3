//! # Variant Configuration
//!
//! The three axes that parameterize variant generation: target sizes,
//! output formats, and device-pixel-ratio (DPR) multipliers. The engine
//! iterates their Cartesian product in size-major, format-middle,
//! DPR-minor order.
//!
//! [`VariantConfig`] is a value object: mutators chain on `&mut self`,
//! getters hand out owned copies so callers can never alias internal
//! state. An empty axis is valid and simply yields zero variants.
//!
//! # Example
//! ```
//! use respimg::config::variants::{FormatKind, OutputFormat, VariantConfig, VariantSize};
//!
//! let mut config = VariantConfig::empty();
//! config
//!     .add_size(VariantSize::width(320))
//!     .add_format(OutputFormat::new(FormatKind::Webp))
//!     .add_dpr_ratio(1.0)
//!     .add_dpr_ratio(2.0);
//!
//! assert_eq!(config.combination_count(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output formats the pipeline can encode variants into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Webp,
    Avif,
    Jpeg,
    Png,
}

impl FormatKind {
    /// Lowercase name, as used in filenames and result keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Webp => "webp",
            FormatKind::Avif => "avif",
            FormatKind::Jpeg => "jpeg",
            FormatKind::Png => "png",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nominal target size. Height omitted means "scale by width alone,
/// preserving aspect ratio".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSize {
    pub width: u32,
    pub height: Option<u32>,
}

impl VariantSize {
    /// Width-only size (aspect-ratio-preserving scale).
    pub fn width(width: u32) -> Self {
        Self {
            width,
            height: None,
        }
    }

    /// Size bounded in both dimensions.
    pub fn bounded(width: u32, height: u32) -> Self {
        Self {
            width,
            height: Some(height),
        }
    }
}

/// Default encode quality when the caller does not specify one.
pub const DEFAULT_QUALITY: u8 = 80;

/// An output format plus its encode quality (1–100).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFormat {
    pub kind: FormatKind,
    pub quality: u8,
}

impl OutputFormat {
    /// Format at [`DEFAULT_QUALITY`].
    pub fn new(kind: FormatKind) -> Self {
        Self {
            kind,
            quality: DEFAULT_QUALITY,
        }
    }

    /// Format at an explicit quality, clamped into 1–100.
    pub fn with_quality(kind: FormatKind, quality: u8) -> Self {
        Self {
            kind,
            quality: quality.clamp(1, 100),
        }
    }
}

/// The full combination-space configuration for one processing profile.
///
/// Axis order is preserved: result lists follow the order sizes and DPR
/// ratios were configured in. DPR insertion suppresses duplicates and
/// ignores non-positive or non-finite values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    sizes: Vec<VariantSize>,
    formats: Vec<OutputFormat>,
    dpr_ratios: Vec<f64>,
}

impl Default for VariantConfig {
    /// Defaults: widths 320/640/1024, webp+avif at quality 80, DPR 1/2/3.
    fn default() -> Self {
        Self {
            sizes: vec![
                VariantSize::width(320),
                VariantSize::width(640),
                VariantSize::width(1024),
            ],
            formats: vec![
                OutputFormat::new(FormatKind::Webp),
                OutputFormat::new(FormatKind::Avif),
            ],
            dpr_ratios: vec![1.0, 2.0, 3.0],
        }
    }
}

impl VariantConfig {
    /// A configuration with all three axes empty (zero variants).
    pub fn empty() -> Self {
        Self {
            sizes: Vec::new(),
            formats: Vec::new(),
            dpr_ratios: Vec::new(),
        }
    }

    /// Replaces the size axis.
    pub fn set_sizes(&mut self, sizes: &[VariantSize]) -> &mut Self {
        self.sizes = sizes.to_vec();
        self
    }

    /// Appends one size.
    pub fn add_size(&mut self, size: VariantSize) -> &mut Self {
        self.sizes.push(size);
        self
    }

    /// Replaces the format axis.
    pub fn set_formats(&mut self, formats: &[OutputFormat]) -> &mut Self {
        self.formats = formats.to_vec();
        self
    }

    /// Appends one output format.
    pub fn add_format(&mut self, format: OutputFormat) -> &mut Self {
        self.formats.push(format);
        self
    }

    /// Replaces the DPR axis. Duplicates and invalid ratios are dropped,
    /// first occurrence wins.
    pub fn set_dpr_ratios(&mut self, ratios: &[f64]) -> &mut Self {
        self.dpr_ratios.clear();
        for &r in ratios {
            self.add_dpr_ratio(r);
        }
        self
    }

    /// Appends one DPR ratio unless it is already present or invalid.
    pub fn add_dpr_ratio(&mut self, ratio: f64) -> &mut Self {
        if ratio.is_finite() && ratio > 0.0 && !self.dpr_ratios.iter().any(|r| *r == ratio) {
            self.dpr_ratios.push(ratio);
        }
        self
    }

    /// Owned copy of the size axis.
    pub fn sizes(&self) -> Vec<VariantSize> {
        self.sizes.clone()
    }

    /// Owned copy of the format axis.
    pub fn formats(&self) -> Vec<OutputFormat> {
        self.formats.clone()
    }

    /// Owned copy of the DPR axis.
    pub fn dpr_ratios(&self) -> Vec<f64> {
        self.dpr_ratios.clone()
    }

    /// Number of (size, format, dpr) tuples this configuration spans.
    pub fn combination_count(&self) -> usize {
        self.sizes.len() * self.formats.len() * self.dpr_ratios.len()
    }
}
