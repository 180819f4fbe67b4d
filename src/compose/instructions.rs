//! Drawing instructions produced by the composer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Cell, Digest, GridSpec, Theme};

/// Side length of the logical square every icon is drawn in.
pub const VIEWBOX_EDGE: f64 = 1000.0;

/// One of the four mirrored quadrants of the viewbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];
}

/// An axis-aligned square in viewbox units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Square {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// A square placed in one quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub quadrant: Quadrant,
    #[serde(flatten)]
    pub square: Square,
}

impl Placement {
    /// Place the square for `cell` in `quadrant`.
    ///
    /// The top-left quadrant uses the cell position directly; the others are
    /// mirrored about the vertical and/or horizontal midline.
    pub fn for_cell(cell: Cell, cell_edge: f64, quadrant: Quadrant) -> Self {
        let x = f64::from(cell.col) * cell_edge;
        let y = f64::from(cell.row) * cell_edge;
        let mirrored_x = VIEWBOX_EDGE - x - cell_edge;
        let mirrored_y = VIEWBOX_EDGE - y - cell_edge;

        let (x, y) = match quadrant {
            Quadrant::TopLeft => (x, y),
            Quadrant::TopRight => (mirrored_x, y),
            Quadrant::BottomLeft => (x, mirrored_y),
            Quadrant::BottomRight => (mirrored_x, mirrored_y),
        };

        Self {
            quadrant,
            square: Square {
                x,
                y,
                size: cell_edge,
            },
        }
    }
}

/// The four mirrored squares for one filled cell, all in the same colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellInstruction {
    /// 1-based position in bit-scan order
    pub index: usize,
    pub cell: Cell,
    pub fill: &'static str,
    pub placements: [Placement; 4],
}

/// Background plus per-cell fill colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSelection {
    pub background: &'static str,
    /// 1-based cell index -> colour word
    pub fills: BTreeMap<usize, &'static str>,
}

/// Everything a vector renderer needs to draw one icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderInstructionSet {
    pub digest: Digest,
    pub theme: Theme,
    pub grid: GridSpec,
    pub viewbox: f64,
    pub cell_edge: f64,
    pub background: &'static str,
    pub cells: Vec<CellInstruction>,
}

impl RenderInstructionSet {
    /// Number of squares drawn on top of the background.
    pub fn square_count(&self) -> usize {
        self.cells.len() * Quadrant::ALL.len()
    }

    /// The colour choices this instruction set was built from.
    pub fn selection(&self) -> ColorSelection {
        ColorSelection {
            background: self.background,
            fills: self.cells.iter().map(|c| (c.index, c.fill)).collect(),
        }
    }
}
