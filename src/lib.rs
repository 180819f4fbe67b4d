//! identigrid - Mirrored grid identity icons
//!
//! A library for turning arbitrary strings into deterministic, symmetric
//! icons: a SHA-256 digest picks the filled cells of a small grid and the
//! colours from a named theme, and the result is drawn as SVG and PNG.

pub mod cli;
pub mod compose;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;

pub use compose::{
    compose, generate_icon, select_colours, CellInstruction, ColorSelection, IconRequest,
    Placement, Quadrant, RenderInstructionSet, Square,
};
pub use error::{IconError, Result};
pub use manifest::Manifest;
pub use render::{
    output_sizes, write_png, CoverageRasterizer, Rasterizer, SvgRenderer, VectorImage,
    VectorRenderer, DEFAULT_PNG_SIZES,
};
pub use types::{
    resolve, Cell, Colour, Digest, EffectivePalette, FilledCellSet, GridSpec, Palette,
    PatternIndex, Theme,
};
