//! # Processing Result
//!
//! The structured outcome of one `process_image` call: the stored
//! original's path plus, per configured output format, the ordered list
//! of stored variant paths.
//!
//! Every configured format is a key even when all of its combinations
//! failed — an empty list, never an absent key. List order is
//! size-major, DPR-minor (all DPR variants of the first size before any
//! of the second).
//!
//! # Example
//! ```
//! use respimg::config::variants::FormatKind;
//! use respimg::pipeline::result::ProcessingResult;
//!
//! let result = ProcessingResult::seeded(
//!     "/uploads/originals/abc.jpg",
//!     [FormatKind::Webp, FormatKind::Avif],
//! );
//! assert_eq!(result.paths_for(FormatKind::Webp), &[] as &[String]);
//! assert!(result.generated.contains_key("avif"));
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::variants::FormatKind;

/// Manifest mapping the original and all derived paths.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingResult {
    /// Storage path of the original, unmodified upload.
    pub original: String,
    /// Per-format ordered lists of stored variant paths.
    pub generated: BTreeMap<String, Vec<String>>,
}

impl ProcessingResult {
    /// A result with one empty list per configured format kind.
    pub fn seeded(original: impl Into<String>, kinds: impl IntoIterator<Item = FormatKind>) -> Self {
        let mut generated = BTreeMap::new();
        for kind in kinds {
            generated.entry(kind.as_str().to_string()).or_insert_with(Vec::new);
        }
        Self {
            original: original.into(),
            generated,
        }
    }

    /// Variant paths for one format; empty when the format produced
    /// nothing or was not configured.
    pub fn paths_for(&self, kind: FormatKind) -> &[String] {
        self.generated
            .get(kind.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of generated variants across all formats.
    pub fn variant_count(&self) -> usize {
        self.generated.values().map(Vec::len).sum()
    }
}
