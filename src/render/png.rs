//! PNG output for vector icons.
//!
//! Rasterizes a [`VectorImage`] at an arbitrary pixel size. Rectangle edges
//! that fall between pixels are anti-aliased by area coverage.

use std::collections::BTreeSet;
use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{IconError, Result};
use crate::types::Colour;

use super::{Rasterizer, VectorImage};

/// Pixel sizes always written for an icon.
pub const DEFAULT_PNG_SIZES: [u32; 5] = [24, 32, 64, 128, 512];

/// Largest PNG edge length accepted.
pub const MAX_PNG_SIZE: u32 = 4096;

/// The default sizes plus any extras, deduplicated and ascending.
pub fn output_sizes(extra: impl IntoIterator<Item = u32>) -> Result<BTreeSet<u32>> {
    let mut sizes: BTreeSet<u32> = DEFAULT_PNG_SIZES.into_iter().collect();
    for size in extra {
        check_size(size)?;
        sizes.insert(size);
    }
    Ok(sizes)
}

fn check_size(size: u32) -> Result<()> {
    if size == 0 || size > MAX_PNG_SIZE {
        return Err(IconError::Render {
            message: format!("PNG size must be between 1 and {} pixels, got {}", MAX_PNG_SIZE, size),
            help: Some("Pass an edge length such as --include-png-size 200".to_string()),
        });
    }
    Ok(())
}

/// Area-coverage rasterizer for axis-aligned rectangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageRasterizer;

impl CoverageRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for CoverageRasterizer {
    fn rasterize(&self, image: &VectorImage, edge_px: u32) -> Result<RgbaImage> {
        check_size(edge_px)?;

        let edge = edge_px as usize;
        let scale = f64::from(edge_px) / image.viewbox;
        let background = channels(Colour::from_name(image.background)?);
        let mut canvas = vec![background; edge * edge];

        for rect in &image.rects {
            let fill = channels(Colour::from_name(rect.fill)?);
            let x0 = rect.x * scale;
            let y0 = rect.y * scale;
            let x1 = (rect.x + rect.width) * scale;
            let y1 = (rect.y + rect.height) * scale;

            for py in pixel_span(y0, y1, edge) {
                let cover_y = overlap(y0, y1, py);
                for px in pixel_span(x0, x1, edge) {
                    let coverage = cover_y * overlap(x0, x1, px);
                    if coverage <= 0.0 {
                        continue;
                    }
                    let dst = &mut canvas[py * edge + px];
                    for (d, s) in dst.iter_mut().zip(fill) {
                        *d = *d * (1.0 - coverage) + s * coverage;
                    }
                }
            }
        }

        let mut img: RgbaImage = ImageBuffer::new(edge_px, edge_px);
        for (pixel, rgb) in img.pixels_mut().zip(&canvas) {
            *pixel = Rgba([
                rgb[0].round() as u8,
                rgb[1].round() as u8,
                rgb[2].round() as u8,
                255,
            ]);
        }
        Ok(img)
    }
}

fn channels(colour: Colour) -> [f64; 3] {
    [
        f64::from(colour.r),
        f64::from(colour.g),
        f64::from(colour.b),
    ]
}

/// Pixel indices touched by `[start, end)`, clamped to the canvas.
fn pixel_span(start: f64, end: f64, edge: usize) -> std::ops::Range<usize> {
    let first = start.floor().max(0.0) as usize;
    let last = (end.ceil().max(0.0) as usize).min(edge);
    first.min(last)..last
}

/// Length of `[start, end)` that falls inside pixel `p`.
fn overlap(start: f64, end: f64, p: usize) -> f64 {
    let lo = start.max(p as f64);
    let hi = end.min(p as f64 + 1.0);
    (hi - lo).max(0.0)
}

/// Write a raster icon to a PNG file.
pub fn write_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
