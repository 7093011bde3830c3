//! # Transform Backend (image-rs)
//!
//! [`ImageTransformer`] implementation on the [`image`] crate, encoding
//! **WebP**, **AVIF**, **JPEG**, and **PNG** variants.
//!
//! The input container is guessed from the bytes, never from the
//! filename. Decode coverage follows the `image` crate: SVG (and AVIF,
//! unless the native decoder feature is enabled) will fail the
//! decodability probe even though the validation gate admits them as
//! input containers.
//!
//! JPEG honors the configured quality; the crate's WebP encoder is
//! lossless and PNG has no quality axis, so quality is ignored there.
//!
//! # Example
//! ```rust,no_run
//! use respimg::config::variants::{FormatKind, OutputFormat};
//! use respimg::transform::image_rs::ImageRsTransformer;
//! use respimg::transform::transformer::{ImageTransformer, TargetSize};
//!
//! let t = ImageRsTransformer::default();
//! let bytes = std::fs::read("input.png").unwrap();
//!
//! let variant = t
//!     .transform(&bytes, TargetSize::width(640), OutputFormat::new(FormatKind::Webp))
//!     .expect("transform ok");
//! std::fs::write("out.webp", variant.bytes).unwrap();
//! ```

use std::io::Cursor;

use anyhow::{Context, Result};
use image::{
    codecs::jpeg::JpegEncoder, imageops::FilterType, ColorType, DynamicImage, ExtendedColorType,
    GenericImageView, ImageFormat, ImageReader,
};

use super::transformer::{ImageMetadata, ImageTransformer, TargetSize, TransformedImage};
use crate::config::variants::{FormatKind, OutputFormat};

/// A concrete [`ImageTransformer`] using the `image` crate.
#[derive(Clone, Debug, Default)]
pub struct ImageRsTransformer;

impl ImageRsTransformer {
    fn decode(bytes: &[u8]) -> Result<(DynamicImage, ImageFormat)> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .context("guess format")?;
        let format = reader.format().context("unrecognized image container")?;
        let img = reader.decode().context("decode image")?;
        Ok((img, format))
    }
}

impl ImageTransformer for ImageRsTransformer {
    fn transform(
        &self,
        bytes: &[u8],
        target: TargetSize,
        format: OutputFormat,
    ) -> Result<TransformedImage> {
        let (img, _) = Self::decode(bytes)?;
        let resized = resize_fit(img, target);
        let (width, height) = resized.dimensions();
        let bytes = encode(&resized, format)
            .with_context(|| format!("encode {}x{height} as {}", width, format.kind))?;
        Ok(TransformedImage {
            bytes,
            format: format.kind,
            width,
            height,
        })
    }

    fn introspect(&self, bytes: &[u8]) -> Result<ImageMetadata> {
        let (img, format) = Self::decode(bytes)?;
        let (width, height) = img.dimensions();
        let color = img.color();
        Ok(ImageMetadata {
            format: format
                .extensions_str()
                .first()
                .copied()
                .unwrap_or("unknown")
                .to_string(),
            width,
            height,
            has_alpha: color.has_alpha(),
            color_type: format!("{color:?}"),
        })
    }

    fn is_decodable(&self, bytes: &[u8]) -> bool {
        // Header-level probe: format guess plus dimension parse, without
        // decoding the full pixel data.
        ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .ok()
            .and_then(|r| r.into_dimensions().ok())
            .is_some()
    }
}

/// Resizes proportionally to fit inside the target bounds, never
/// upscaling beyond the source resolution.
///
/// Uses [`FilterType::Triangle`] for quality-speed balance.
fn resize_fit(img: DynamicImage, target: TargetSize) -> DynamicImage {
    let (w, h) = img.dimensions();
    let max_w = target.width.min(w);
    let max_h = target.height.unwrap_or(h).min(h);
    if w <= max_w && h <= max_h {
        return img;
    }
    img.resize(max_w, max_h, FilterType::Triangle)
}

fn encode(img: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>> {
    let (w, h) = img.dimensions();
    let mut out = Vec::new();
    let mut cur = Cursor::new(&mut out);

    match format.kind {
        FormatKind::Jpeg => {
            let rgb = img.to_rgb8();
            JpegEncoder::new_with_quality(&mut cur, format.quality).encode(
                &rgb,
                w,
                h,
                ExtendedColorType::Rgb8,
            )?;
        }
        FormatKind::Png => {
            let rgba = img.to_rgba8();
            image::write_buffer_with_format(&mut cur, &rgba, w, h, ColorType::Rgba8, ImageFormat::Png)?;
        }
        FormatKind::Webp => {
            let rgba = img.to_rgba8();
            image::write_buffer_with_format(
                &mut cur,
                &rgba,
                w,
                h,
                ColorType::Rgba8,
                ImageFormat::WebP,
            )?;
        }
        FormatKind::Avif => {
            img.write_to(&mut cur, ImageFormat::Avif)?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};
    use std::io::Cursor;

    fn make_png(w: u32, h: u32) -> Vec<u8> {
        let img: ImageBuffer<Rgba<u8>, _> = ImageBuffer::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 255])
            }
        });
        let mut cur = Cursor::new(Vec::new());
        image::write_buffer_with_format(
            &mut cur,
            img.as_raw(),
            w,
            h,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .expect("encode png");
        cur.into_inner()
    }

    #[test]
    fn webp_output_carries_riff_header() {
        let t = ImageRsTransformer::default();
        let png = make_png(200, 100);

        let out = t
            .transform(
                &png,
                TargetSize::width(100),
                OutputFormat::new(FormatKind::Webp),
            )
            .expect("transform ok");

        assert_eq!(out.format, FormatKind::Webp);
        assert_eq!((out.width, out.height), (100, 50));
        assert_eq!(&out.bytes[0..4], b"RIFF");
        assert_eq!(&out.bytes[8..12], b"WEBP");
    }

    #[test]
    fn jpeg_output_within_bounds_and_aspect_preserved() {
        let t = ImageRsTransformer::default();
        let png = make_png(2000, 1000);

        let out = t
            .transform(
                &png,
                TargetSize::bounded(1280, 1280),
                OutputFormat::new(FormatKind::Jpeg),
            )
            .expect("transform ok");

        assert_eq!(&out.bytes[0..3], &[0xFF, 0xD8, 0xFF]);

        let decoded = image::load_from_memory(&out.bytes).expect("decode jpeg");
        let (rw, rh) = decoded.dimensions();
        assert!(rw <= 1280 && rh <= 1280, "resized dims: {rw}x{rh}");
        let ratio = (rw as f64) / (rh as f64);
        assert!((ratio - 2.0).abs() < 0.05, "ratio approx 2.0, got {ratio}");
    }

    #[test]
    fn jpeg_quality_changes_output_size() {
        let t = ImageRsTransformer::default();
        let png = make_png(400, 300);

        let low = t
            .transform(
                &png,
                TargetSize::width(400),
                OutputFormat::with_quality(FormatKind::Jpeg, 10),
            )
            .expect("low q");
        let high = t
            .transform(
                &png,
                TargetSize::width(400),
                OutputFormat::with_quality(FormatKind::Jpeg, 95),
            )
            .expect("high q");

        assert!(
            low.bytes.len() < high.bytes.len(),
            "q10 {} vs q95 {}",
            low.bytes.len(),
            high.bytes.len()
        );
    }

    #[test]
    fn small_image_is_not_upscaled() {
        let t = ImageRsTransformer::default();
        let png = make_png(100, 50);

        let out = t
            .transform(
                &png,
                TargetSize::width(500),
                OutputFormat::new(FormatKind::Png),
            )
            .expect("transform ok");
        assert_eq!((out.width, out.height), (100, 50));
    }

    #[test]
    fn width_only_target_scales_by_width() {
        let t = ImageRsTransformer::default();
        let png = make_png(300, 600);

        let out = t
            .transform(
                &png,
                TargetSize::width(150),
                OutputFormat::new(FormatKind::Png),
            )
            .expect("transform ok");
        assert_eq!((out.width, out.height), (150, 300));
    }

    #[test]
    fn avif_encode_succeeds_on_small_input() {
        let t = ImageRsTransformer::default();
        let png = make_png(16, 16);

        let out = t
            .transform(
                &png,
                TargetSize::width(16),
                OutputFormat::new(FormatKind::Avif),
            )
            .expect("avif encode ok");
        assert_eq!(out.format, FormatKind::Avif);
        assert!(!out.bytes.is_empty());
        // ISO BMFF container: "ftyp" box at offset 4.
        assert_eq!(&out.bytes[4..8], b"ftyp");
    }

    #[test]
    fn introspect_reports_dimensions_and_alpha() {
        let t = ImageRsTransformer::default();
        let png = make_png(64, 48);

        let meta = t.introspect(&png).expect("introspect ok");
        assert_eq!(meta.format, "png");
        assert_eq!((meta.width, meta.height), (64, 48));
        assert!(meta.has_alpha);
        assert_eq!(meta.color_type, "Rgba8");
    }

    #[test]
    fn is_decodable_rejects_garbage_without_error() {
        let t = ImageRsTransformer::default();
        assert!(!t.is_decodable(b""));
        assert!(!t.is_decodable(b"this is not an image"));
        assert!(t.is_decodable(&make_png(4, 4)));
    }

    #[test]
    fn transform_fails_on_undecodable_bytes() {
        let t = ImageRsTransformer::default();
        let err = t
            .transform(
                b"nope",
                TargetSize::width(100),
                OutputFormat::new(FormatKind::Webp),
            )
            .unwrap_err();
        let msg = format!("{err:#}").to_lowercase();
        assert!(msg.contains("format") || msg.contains("decode"), "got {msg}");
    }
}
