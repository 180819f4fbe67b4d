//! SVG output for composed icons.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::compose::RenderInstructionSet;
use crate::error::{IconError, Result};

use super::VectorRenderer;

/// A filled rectangle in viewbox units.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
}

/// A vector icon: a full-size background and rectangles drawn in order.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorImage {
    pub viewbox: f64,
    /// Physical size written to the `width`/`height` attributes
    pub display_size: String,
    pub background: &'static str,
    pub rects: Vec<VectorRect>,
}

impl VectorImage {
    /// Serialize as a standalone SVG 1.1 document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="utf-8" ?>"#);
        let _ = writeln!(
            out,
            r#"<svg baseProfile="full" height="{size}" version="1.1" viewBox="0 0 {vb} {vb}" width="{size}" xmlns="http://www.w3.org/2000/svg">"#,
            size = self.display_size,
            vb = self.viewbox,
        );
        let _ = writeln!(
            out,
            r#"  <rect fill="{}" height="100%" width="100%" x="0" y="0" />"#,
            self.background
        );
        for rect in &self.rects {
            let _ = writeln!(
                out,
                r#"  <rect fill="{}" height="{}" width="{}" x="{}" y="{}" />"#,
                rect.fill, rect.height, rect.width, rect.x, rect.y
            );
        }
        out.push_str("</svg>\n");
        out
    }

    /// Write the SVG document to a file.
    pub fn write_svg(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_svg()).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write SVG: {}", e),
        })
    }
}

/// Physical `width`/`height` written on every SVG.
pub const DISPLAY_SIZE: &str = "8in";

/// Renders instruction sets as SVG-ready vector images.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl VectorRenderer for SvgRenderer {
    fn render(&self, instructions: &RenderInstructionSet) -> Result<VectorImage> {
        let rects = instructions
            .cells
            .iter()
            .flat_map(|cell| {
                cell.placements.iter().map(move |p| VectorRect {
                    x: p.square.x,
                    y: p.square.y,
                    width: p.square.size,
                    height: p.square.size,
                    fill: cell.fill,
                })
            })
            .collect();

        Ok(VectorImage {
            viewbox: instructions.viewbox,
            display_size: DISPLAY_SIZE.to_string(),
            background: instructions.background,
            rects,
        })
    }
}
