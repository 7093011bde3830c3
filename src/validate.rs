//! # Upload Validation Gate
//!
//! Side-effect-free pre-checks on raw upload input, run before any
//! decoding or storage work. A failing check aborts the whole call;
//! checks do not aggregate.
//!
//! The allow-lists cover input *containers* — broader than the set of
//! formats the pipeline can encode, and broader than what a given
//! transform backend can decode. Lying extensions are caught later by
//! the engine's decodability probe.
//!
//! # Example
//! ```
//! use respimg::validate;
//!
//! assert!(validate::check_extension("holiday.JPG").is_ok());
//! assert!(validate::check_extension("report.pdf").is_err());
//! ```

use crate::error::PipelineError;

/// Accepted input file extensions (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "webp", "avif", "gif", "bmp", "tiff", "svg",
];

/// Accepted declared MIME types, mirroring [`ALLOWED_EXTENSIONS`].
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/avif",
    "image/gif",
    "image/bmp",
    "image/tiff",
    "image/svg+xml",
];

/// Checks the suffix after the last `.` against the extension
/// allow-list. No dot means an empty suffix, which always fails.
pub fn check_extension(filename: &str) -> Result<(), PipelineError> {
    let ext = filename.rsplit_once('.').map(|(_, e)| e).unwrap_or("");
    let lower = ext.to_ascii_lowercase();
    if ALLOWED_EXTENSIONS.contains(&lower.as_str()) {
        Ok(())
    } else {
        Err(PipelineError::UnsupportedFormat(format!(
            "extension {ext:?} of {filename:?} is not an allowed image extension"
        )))
    }
}

/// Checks a declared MIME type against the allow-list
/// (case-insensitive).
pub fn check_mime_type(mime: &str) -> Result<(), PipelineError> {
    let lower = mime.to_ascii_lowercase();
    if ALLOWED_MIME_TYPES.contains(&lower.as_str()) {
        Ok(())
    } else {
        Err(PipelineError::UnsupportedFormat(format!(
            "MIME type {mime:?} is not an allowed image type"
        )))
    }
}

/// Fails when the payload exceeds `max_bytes`.
pub fn check_size(bytes: &[u8], max_bytes: u64) -> Result<(), PipelineError> {
    if bytes.len() as u64 > max_bytes {
        Err(PipelineError::ValidationFailed(format!(
            "payload of {} bytes exceeds the {max_bytes} byte limit",
            bytes.len()
        )))
    } else {
        Ok(())
    }
}

/// Composite gate: empty payload, then extension, then MIME type (only
/// when declared), then size (only when a ceiling is given). The first
/// failing check propagates.
pub fn check_all(
    bytes: &[u8],
    filename: &str,
    mime: Option<&str>,
    max_bytes: Option<u64>,
) -> Result<(), PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::ValidationFailed("empty upload".into()));
    }
    check_extension(filename)?;
    if let Some(mime) = mime {
        check_mime_type(mime)?;
    }
    if let Some(max) = max_bytes {
        check_size(bytes, max)?;
    }
    Ok(())
}
