//! # Pipeline Error Taxonomy
//!
//! A closed set of error kinds for the variant generation pipeline.
//!
//! Validation errors ([`PipelineError::UnsupportedFormat`],
//! [`PipelineError::ValidationFailed`]) are raised before any processing
//! begins. [`PipelineError::ProcessingFailed`] and
//! [`PipelineError::StorageFailed`] wrap the underlying infrastructure
//! error (`anyhow::Error`) from the transform or storage backend.
//!
//! Per-tuple variant failures are *not* surfaced through this type; they
//! are absorbed by the engine and only show up as omissions in the
//! result (see `pipeline::engine`).
//!
//! # Example
//! ```
//! use respimg::error::PipelineError;
//!
//! let err = PipelineError::ValidationFailed("empty upload".into());
//! assert_eq!(err.to_string(), "validation failed: empty upload");
//! assert!(err.cause().is_none());
//! ```

use thiserror::Error;

/// Errors produced by the variant generation pipeline.
///
/// The enum is closed on purpose: callers match exhaustively at the
/// boundary instead of probing error types at runtime.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Extension or declared MIME type outside the allow-list.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty input, or input larger than the caller-supplied ceiling.
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    /// The transform backend could not decode or encode the image, or
    /// the orchestration hit an otherwise unclassified failure.
    #[error("processing failed: {message}")]
    ProcessingFailed {
        message: String,
        cause: Option<anyhow::Error>,
    },

    /// Storage failed for the original image, or on a public
    /// `get_image`/`delete_image` call.
    #[error("storage failed: {message}")]
    StorageFailed {
        message: String,
        cause: Option<anyhow::Error>,
    },
}

impl PipelineError {
    /// A processing failure with no captured infrastructure cause.
    pub fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingFailed {
            message: message.into(),
            cause: None,
        }
    }

    /// A processing failure wrapping the backend error that produced it.
    pub fn processing_with(message: impl Into<String>, cause: anyhow::Error) -> Self {
        Self::ProcessingFailed {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// A storage failure with no captured infrastructure cause.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageFailed {
            message: message.into(),
            cause: None,
        }
    }

    /// A storage failure wrapping the backend error that produced it.
    pub fn storage_with(message: impl Into<String>, cause: anyhow::Error) -> Self {
        Self::StorageFailed {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// The wrapped infrastructure error, when one was captured.
    pub fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            Self::ProcessingFailed { cause, .. } | Self::StorageFailed { cause, .. } => {
                cause.as_ref()
            }
            Self::UnsupportedFormat(_) | Self::ValidationFailed(_) => None,
        }
    }
}
