//! Transform capability: the codec seam and its image-rs backend.

pub mod image_rs;
pub mod transformer;
