//! Rendering module for identigrid.
//!
//! This module turns composed instructions into artifacts: a vector image
//! (written as SVG) and raster images at any number of pixel sizes.

mod png;
mod svg;

use image::RgbaImage;

use crate::compose::RenderInstructionSet;
use crate::error::Result;

pub use png::{output_sizes, write_png, CoverageRasterizer, DEFAULT_PNG_SIZES, MAX_PNG_SIZE};
pub use svg::{SvgRenderer, VectorImage, VectorRect};

/// Draws an instruction set as a vector image.
pub trait VectorRenderer {
    fn render(&self, instructions: &RenderInstructionSet) -> Result<VectorImage>;
}

/// Rasterizes a vector image to `edge_px × edge_px` pixels.
pub trait Rasterizer {
    fn rasterize(&self, image: &VectorImage, edge_px: u32) -> Result<RgbaImage>;
}
