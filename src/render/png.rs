//! Downsampling and PNG output for rendered canvases.
//!
//! The canvas is resized to the logical grid size with a Lanczos filter. This
//! is the only antialiasing step in the pipeline: hard-edged supersampled
//! strokes become smooth edges at the target resolution.

use std::fs;
use std::io;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

use crate::error::{IconsetError, Result};

use super::scale::LOGICAL_SIZE;
use super::Canvas;

/// Resize a canvas to `LOGICAL_SIZE`×`LOGICAL_SIZE`.
///
/// Resampling happens on premultiplied pixels so colour from transparent
/// areas does not bleed into stroke edges; the result is straight alpha.
pub fn downsample(canvas: &Canvas) -> Result<RgbaImage> {
    let size = canvas.size();
    let premultiplied = RgbaImage::from_raw(size, size, canvas.as_premultiplied().to_vec())
        .ok_or_else(|| IconsetError::Build {
            message: format!("Canvas buffer does not match {size}x{size}"),
            help: None,
        })?;

    let mut out = imageops::resize(&premultiplied, LOGICAL_SIZE, LOGICAL_SIZE, FilterType::Lanczos3);
    for pixel in out.pixels_mut() {
        *pixel = demultiply(*pixel);
    }
    Ok(out)
}

fn demultiply(Rgba([r, g, b, a]): Rgba<u8>) -> Rgba<u8> {
    if a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let alpha = u32::from(a);
    // Lanczos overshoot can push a channel past its alpha.
    let channel = |c: u8| ((u32::from(c.min(a)) * 255 + alpha / 2) / alpha) as u8;
    Rgba([channel(r), channel(g), channel(b), a])
}

/// Encode an RGBA image as PNG and write it, creating parent directories.
///
/// Existing files are overwritten.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| IconsetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to encode PNG: {}", e),
        })?;

    fs::write(path, bytes).map_err(|e| IconsetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

/// Downsample a canvas and write it to `path`.
pub fn persist(canvas: &Canvas, path: &Path) -> Result<()> {
    let image = downsample(canvas)?;
    write_png(&image, path)
}

fn ensure_parent(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    match fs::create_dir_all(parent) {
        Ok(()) => Ok(()),
        // Another worker created it first.
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && parent.is_dir() => Ok(()),
        Err(e) => Err(IconsetError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        }),
    }
}
