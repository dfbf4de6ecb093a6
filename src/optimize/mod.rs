//! Lossless web variants of PNG assets.
//!
//! Every source `name.png` gets a sibling `name.<suffix>.png` re-encoded
//! with maximum compression. A variant is never larger than its source:
//! when re-encoding does not help, the variant is a plain copy.

mod report;

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;
use serde::Serialize;

use crate::error::{IconsetError, Result};

pub use report::{human_size, OptimizeReport};

/// Outcome of optimizing one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Optimized {
    pub source: PathBuf,
    pub variant: PathBuf,
    /// Source size in bytes.
    pub before: u64,
    /// Variant size in bytes.
    pub after: u64,
    /// The variant is a byte copy of the source.
    pub fallback: bool,
}

impl Optimized {
    /// Size reduction in percent; `0.0` for an empty source.
    pub fn reduction(&self) -> f64 {
        reduction(self.before, self.after)
    }
}

pub(crate) fn reduction(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    (1.0 - after as f64 / before as f64) * 100.0
}

/// Path of the web variant for `source`: `dir/name.png` → `dir/name.<suffix>.png`.
pub fn variant_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}.{suffix}.png"))
}

/// Write the web variant of a single PNG.
pub fn optimize(source: &Path, suffix: &str) -> Result<Optimized> {
    let variant = variant_path(source, suffix);
    let before = file_size(source)?;

    let image = image::open(source).map_err(|e| IconsetError::Io {
        path: source.to_path_buf(),
        message: format!("Failed to decode PNG: {}", e),
    })?;
    let bytes = encode_best(&image).map_err(|e| IconsetError::Io {
        path: variant.clone(),
        message: format!("Failed to encode PNG: {}", e),
    })?;

    let mut fallback = false;
    let after = if bytes.len() as u64 > before {
        fs::copy(source, &variant).map_err(|e| IconsetError::Io {
            path: variant.clone(),
            message: format!("Failed to copy source: {}", e),
        })?;
        fallback = true;
        file_size(&variant)?
    } else {
        fs::write(&variant, &bytes).map_err(|e| IconsetError::Io {
            path: variant.clone(),
            message: format!("Failed to write PNG: {}", e),
        })?;
        bytes.len() as u64
    };

    Ok(Optimized {
        source: source.to_path_buf(),
        variant,
        before,
        after,
        fallback,
    })
}

/// Optimize every source in order, calling `on_file` after each one.
pub fn optimize_all(
    sources: &[PathBuf],
    suffix: &str,
    mut on_file: impl FnMut(&Optimized),
) -> Result<OptimizeReport> {
    let mut report = OptimizeReport::default();
    for source in sources {
        let file = optimize(source, suffix)?;
        on_file(&file);
        report.push(file);
    }
    Ok(report)
}

/// Re-encode as RGBA when the source carries alpha, RGB otherwise, keeping
/// 16-bit channels when the source has them.
fn encode_best(image: &DynamicImage) -> image::ImageResult<Vec<u8>> {
    let colour = image.color();
    let wide = colour.bytes_per_pixel() > colour.channel_count();
    let normalized = match (colour.has_alpha(), wide) {
        (true, true) => DynamicImage::ImageRgba16(image.to_rgba16()),
        (true, false) => DynamicImage::ImageRgba8(image.to_rgba8()),
        (false, true) => DynamicImage::ImageRgb16(image.to_rgb16()),
        (false, false) => DynamicImage::ImageRgb8(image.to_rgb8()),
    };

    let mut bytes = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        &mut bytes,
        CompressionType::Best,
        FilterType::Adaptive,
    );
    normalized.write_with_encoder(encoder)?;
    Ok(bytes)
}

fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| IconsetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to stat file: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ExtendedColorType, GrayImage, ImageBuffer, ImageEncoder, Luma, Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    /// Deterministic grey noise; PNG filters cannot shrink it.
    fn noise(size: u32) -> GrayImage {
        let mut state: u32 = 0x2545_f491;
        GrayImage::from_fn(size, size, |_, _| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            Luma([(state >> 24) as u8])
        })
    }

    #[test]
    fn test_variant_path() {
        assert_eq!(
            variant_path(Path::new("assets/images/icon-set/Singing.png"), "web"),
            PathBuf::from("assets/images/icon-set/Singing.web.png")
        );
        assert_eq!(
            variant_path(Path::new("a/b.c.png"), "min"),
            PathBuf::from("a/b.c.min.png")
        );
    }

    #[test]
    fn test_reduction() {
        assert_eq!(reduction(0, 0), 0.0);
        assert_eq!(reduction(200, 150), 25.0);
        assert_eq!(reduction(100, 100), 0.0);
    }

    #[test]
    fn test_growing_variant_falls_back_to_copy() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("noise.png");
        noise(64).save(&source).unwrap();

        let result = optimize(&source, "web").unwrap();

        assert!(result.fallback);
        assert_eq!(result.variant, dir.path().join("noise.web.png"));
        assert_eq!(fs::read(&result.variant).unwrap(), fs::read(&source).unwrap());
        assert_eq!(result.before, result.after);
        assert_eq!(format!("{:.1}", result.reduction()), "0.0");
    }

    #[test]
    fn test_variant_is_lossless_and_not_larger() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("gradient.png");
        let image = RgbaImage::from_fn(96, 96, |x, y| {
            Rgba([(x * 2) as u8, (y * 2) as u8, 128, if x < 48 { 255 } else { 0 }])
        });
        let mut bytes = Vec::new();
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Fast, FilterType::NoFilter)
            .write_image(image.as_raw(), 96, 96, ExtendedColorType::Rgba8)
            .unwrap();
        fs::write(&source, bytes).unwrap();

        let result = optimize(&source, "web").unwrap();

        assert!(result.after <= result.before);
        let decoded = image::open(&result.variant).unwrap().to_rgba8();
        assert_eq!(decoded.as_raw(), image.as_raw());
    }

    #[test]
    fn test_sixteen_bit_source_keeps_its_depth() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("deep.png");
        let image: ImageBuffer<Rgba<u16>, Vec<u16>> = ImageBuffer::from_fn(32, 32, |x, y| {
            Rgba([x as u16 * 2049 + 1, y as u16 * 2039 + 3, 0x1234, 0xfffe])
        });
        image.save(&source).unwrap();

        let result = optimize(&source, "web").unwrap();

        let decoded = image::open(&result.variant).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba16);
        assert_eq!(decoded.to_rgba16().as_raw(), image.as_raw());
    }

    #[test]
    fn test_rgb_source_stays_opaque() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("flat.png");
        image::RgbImage::from_pixel(32, 32, image::Rgb([10, 132, 255]))
            .save(&source)
            .unwrap();

        let result = optimize(&source, "web").unwrap();
        let decoded = image::open(&result.variant).unwrap();
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_overwrites_existing_variant() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("noise.png");
        noise(16).save(&source).unwrap();
        fs::write(dir.path().join("noise.web.png"), b"stale").unwrap();

        let result = optimize(&source, "web").unwrap();
        assert_ne!(fs::read(&result.variant).unwrap(), b"stale".to_vec());
    }

    #[test]
    fn test_undecodable_source_is_an_error() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("broken.png");
        fs::write(&source, b"not a png").unwrap();

        let err = optimize(&source, "web").unwrap_err();
        assert!(matches!(err, IconsetError::Io { .. }));
    }

    #[test]
    fn test_optimize_all_reports_each_file() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        noise(16).save(&a).unwrap();
        noise(24).save(&b).unwrap();

        let mut seen = Vec::new();
        let report = optimize_all(&[a.clone(), b.clone()], "web", |f| seen.push(f.source.clone())).unwrap();

        assert_eq!(seen, vec![a, b]);
        assert_eq!(report.files.len(), 2);
        assert_eq!(
            report.total_before(),
            report.files.iter().map(|f| f.before).sum::<u64>()
        );
    }
}
