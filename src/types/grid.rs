//! Grid geometry and digest-to-pattern resolution.

use std::fmt;

use serde::Serialize;

use crate::error::{IconError, Result};

use super::digest::{Digest, DIGEST_BITS};

/// A square grid of `edge × edge` cells covering one quadrant of the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridSpec {
    edge: u32,
}

impl GridSpec {
    /// Create a grid spec. The edge must be at least 1.
    pub fn new(edge: u32) -> Result<Self> {
        if edge == 0 {
            return Err(IconError::InvalidGrid {
                message: "grid edge must be a positive integer, got 0".to_string(),
            });
        }
        Ok(Self { edge })
    }

    /// Number of cells along one side.
    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// Total number of cells (`edge²`).
    pub fn cell_count(&self) -> u64 {
        u64::from(self.edge) * u64::from(self.edge)
    }

    /// Cell for a bit position in row-major order.
    fn cell_at(&self, position: u64) -> Cell {
        let edge = u64::from(self.edge);
        Cell {
            row: (position / edge) as u32,
            col: (position % edge) as u32,
        }
    }
}

/// A grid cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// `(digest mod 2^cell_count) + 1`, an integer in `[1, 2^cell_count]`.
///
/// Only the low bits that can be non-zero are stored. `bits` holds the lowest
/// `bits.len()` bits of the value, most significant first; every higher bit
/// below position `cell_count` is zero. `overflow` marks the single value
/// `2^cell_count`, which needs one bit more than the grid has cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternIndex {
    cell_count: u64,
    bits: Vec<bool>,
    overflow: bool,
}

impl PatternIndex {
    /// Derive the pattern index for a grid from a digest.
    pub fn derive(digest: &Digest, grid: &GridSpec) -> Self {
        let cell_count = grid.cell_count();
        // One extra bit of headroom when the grid is wider than the digest so
        // the +1 carry always lands inside the window.
        let window = if cell_count > DIGEST_BITS as u64 {
            DIGEST_BITS + 1
        } else {
            cell_count as usize
        };

        let mut bits = digest.low_bits(window);
        let mut carry = true;
        for bit in bits.iter_mut().rev() {
            if !carry {
                break;
            }
            carry = *bit;
            *bit = !*bit;
        }

        Self {
            cell_count,
            bits,
            overflow: carry,
        }
    }

    /// Check the index lies in `[1, 2^cell_count]`.
    pub fn validate(&self) -> Result<()> {
        let any_set = self.bits.iter().any(|&b| b);
        if self.overflow && any_set {
            return Err(IconError::Range {
                message: format!("index exceeds 2^{}", self.cell_count),
            });
        }
        if !self.overflow && !any_set {
            return Err(IconError::Range {
                message: "index is 0, expected at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Exact value when it fits in 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        if self.overflow {
            return 1u128.checked_shl(u32::try_from(self.cell_count).ok()?);
        }
        let significant = self.bits.iter().skip_while(|&&b| !b).count();
        if significant > 128 {
            return None;
        }
        Some(
            self.bits
                .iter()
                .fold(0u128, |acc, &b| (acc << 1) | u128::from(b)),
        )
    }

    /// Positions of set bits in the zero-padded binary form, scanning from the
    /// most significant bit.
    fn set_positions(&self) -> Vec<u64> {
        if self.overflow {
            // `1` followed by `cell_count` zeros
            return vec![0];
        }
        let offset = self.cell_count - self.bits.len() as u64;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| offset + i as u64)
            .collect()
    }
}

impl fmt::Display for PatternIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.overflow {
            return write!(f, "1 followed by {} zeros", self.cell_count);
        }
        let hidden = self.cell_count - self.bits.len() as u64;
        if hidden > 0 {
            write!(f, "{} zeros + ", hidden)?;
        }
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// The filled cells of one icon, in bit-scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilledCellSet {
    grid: GridSpec,
    cells: Vec<Cell>,
}

impl FilledCellSet {
    /// Build from cells already in bit-scan order.
    pub fn new(grid: GridSpec, cells: Vec<Cell>) -> Result<Self> {
        if let Some(cell) = cells
            .iter()
            .find(|c| c.row >= grid.edge() || c.col >= grid.edge())
        {
            return Err(IconError::Range {
                message: format!("cell {} outside a {}x{} grid", cell, grid.edge(), grid.edge()),
            });
        }
        Ok(Self { grid, cells })
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// Resolve the filled cells for a digest on a grid.
pub fn resolve(digest: &Digest, grid: &GridSpec) -> Result<FilledCellSet> {
    let index = PatternIndex::derive(digest, grid);
    index.validate()?;

    let cells = index
        .set_positions()
        .into_iter()
        .map(|position| grid.cell_at(position))
        .collect();

    FilledCellSet::new(*grid, cells)
}
