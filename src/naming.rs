//! # Naming Functions
//!
//! Pure formatting of variant and original file identifiers.
//!
//! Variant names follow `"{basename}_{width}w@{dpr}x.{format}"` where
//! `width` is the *nominal* (pre-DPR) width — the DPR multiplier is
//! encoded separately in the `@Nx` suffix, so the filename describes the
//! logical CSS-pixel width while the encoded image is DPR× larger.
//!
//! Original uploads get a fresh UUIDv4 token with the original file's
//! extension preserved, placed under a base path.
//!
//! # Example
//! ```
//! use respimg::config::variants::FormatKind;
//! use respimg::naming;
//!
//! assert_eq!(
//!     naming::variant_name("pic.jpg", 320, FormatKind::Webp, 2.0),
//!     "pic_320w@2x.webp"
//! );
//! ```

use uuid::Uuid;

use crate::config::variants::FormatKind;

/// Default base path for stored originals.
pub const DEFAULT_ORIGINALS_BASE: &str = "/uploads/originals";

/// Splits off the final `.`-delimited extension. No dot means the whole
/// name is the basename and the extension is empty; the extension keeps
/// its leading dot and original case.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx..]),
        None => (name, ""),
    }
}

/// Renders a DPR ratio for the `@Nx` suffix: integral values without a
/// decimal point, fractional values in their natural representation.
fn format_dpr(dpr: f64) -> String {
    if dpr.fract() == 0.0 {
        format!("{}", dpr as u64)
    } else {
        format!("{dpr}")
    }
}

/// Derived variant filename for one (width, format, DPR) combination.
///
/// Deterministic, no I/O.
pub fn variant_name(original: &str, width: u32, format: FormatKind, dpr: f64) -> String {
    let (basename, _) = split_extension(original);
    format!("{basename}_{width}w@{}x.{format}", format_dpr(dpr))
}

/// Fresh globally-unique identifier for an original upload, preserving
/// the original extension (including case).
///
/// Consumes entropy from the process-wide random source; otherwise pure.
pub fn original_identifier(original: &str) -> String {
    let (_, ext) = split_extension(original);
    format!("{}{ext}", Uuid::new_v4())
}

/// Full storage path for an original upload under `base`.
pub fn original_path(original: &str, base: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        original_identifier(original)
    )
}
