//! Colour type and colour-word resolution.

use std::fmt;

use crate::error::{IconError, Result};

/// An opaque sRGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Resolve an SVG colour keyword (e.g. `cornflowerblue`).
    ///
    /// Matching is exact and case-sensitive, the same way exclusions are matched.
    pub fn from_name(name: &str) -> Result<Self> {
        let srgb = palette::named::from_str(name).ok_or_else(|| IconError::Parse {
            message: format!("Unknown colour word: {}", name),
            help: Some("Use a lowercase SVG colour keyword such as 'navy'".to_string()),
        })?;
        Ok(Self::rgb(srgb.red, srgb.green, srgb.blue))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
