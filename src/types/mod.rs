//! Core domain types for identigrid.
//!
//! This module contains the deterministic building blocks of an icon:
//! - `Digest` - 256-bit hash of the input string and index selection
//! - `GridSpec` / `FilledCellSet` - which cells of the quadrant grid are filled
//! - `Palette` / `Theme` - themed colour-word collections with exclusions
//! - `Colour` - RGBA values for colour words

mod colour;
mod digest;
mod grid;
mod palette;

pub use colour::Colour;
pub use digest::{clean_input, Digest, DIGEST_BITS, DIGEST_BYTES};
pub use grid::{resolve, Cell, FilledCellSet, GridSpec, PatternIndex};
pub use palette::{EffectivePalette, Palette, Theme};
