//! Pattern composition - turns a digest and filled cells into drawing
//! instructions.
//!
//! Composition is a pure function of its inputs: the same input string,
//! theme, grid and exclusions always produce the same instruction set.

mod instructions;

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::types::{clean_input, resolve, Digest, FilledCellSet, GridSpec, Theme};

pub use instructions::{
    CellInstruction, ColorSelection, Placement, Quadrant, RenderInstructionSet, Square,
    VIEWBOX_EDGE,
};

/// Choose the background and one fill colour per filled cell.
///
/// The background comes from the theme minus `excluded`. Cell fills come from
/// the theme minus `excluded` and the background, so shapes always contrast
/// with what is behind them.
pub fn select_colours(
    cells: &FilledCellSet,
    digest: &Digest,
    theme: Theme,
    excluded: &BTreeSet<String>,
) -> Result<ColorSelection> {
    let palette = theme.palette();
    let background = palette.filter(excluded).select(digest)?;

    let mut cell_excluded = excluded.clone();
    cell_excluded.insert(background.to_string());

    let mut fills = BTreeMap::new();
    for index in 1..=cells.len() {
        let fill = palette.filter(&cell_excluded).select_with_offset(digest, index)?;
        fills.insert(index, fill);
    }

    Ok(ColorSelection { background, fills })
}

/// Compose the full instruction set for an icon.
pub fn compose(
    cells: &FilledCellSet,
    grid: &GridSpec,
    digest: &Digest,
    theme: Theme,
    excluded: &BTreeSet<String>,
) -> Result<RenderInstructionSet> {
    let selection = select_colours(cells, digest, theme, excluded)?;
    let cell_edge = (VIEWBOX_EDGE / 2.0) / f64::from(grid.edge());

    let instructions = cells
        .iter()
        .zip(selection.fills.values())
        .enumerate()
        .map(|(i, (&cell, &fill))| CellInstruction {
            index: i + 1,
            cell,
            fill,
            placements: Quadrant::ALL.map(|q| Placement::for_cell(cell, cell_edge, q)),
        })
        .collect();

    Ok(RenderInstructionSet {
        digest: *digest,
        theme,
        grid: *grid,
        viewbox: VIEWBOX_EDGE,
        cell_edge,
        background: selection.background,
        cells: instructions,
    })
}

/// A fully resolved request for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    pub input: String,
    pub theme: Theme,
    pub grid: GridSpec,
    pub excluded: BTreeSet<String>,
}

impl IconRequest {
    pub fn new(input: impl Into<String>, theme: Theme, grid: GridSpec) -> Self {
        Self {
            input: input.into(),
            theme,
            grid,
            excluded: BTreeSet::new(),
        }
    }

    /// Exclude colour words from every selection.
    pub fn excluding<I, S>(mut self, colours: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(colours.into_iter().map(Into::into));
        self
    }

    /// Input with surrounding whitespace removed, as hashed.
    pub fn clean_input(&self) -> &str {
        clean_input(&self.input)
    }

    /// Run the pipeline: digest, resolve, compose.
    pub fn generate(&self) -> Result<RenderInstructionSet> {
        let digest = Digest::from_input(&self.input);
        let cells = resolve(&digest, &self.grid)?;
        compose(&cells, &self.grid, &digest, self.theme, &self.excluded)
    }
}

/// Generate the drawing instructions for an input string.
pub fn generate_icon(
    input: &str,
    theme: Theme,
    grid_edge: u32,
    excluded: &BTreeSet<String>,
) -> Result<RenderInstructionSet> {
    IconRequest::new(input, theme, GridSpec::new(grid_edge)?)
        .excluding(excluded.iter().cloned())
        .generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use crate::types::Cell;
    use pretty_assertions::assert_eq;

    fn none() -> BTreeSet<String> {
        BTreeSet::new()
    }

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn fills(icon: &RenderInstructionSet) -> Vec<&'static str> {
        icon.cells.iter().map(|c| c.fill).collect()
    }

    #[test]
    fn test_alice_full140_grid4() {
        let icon = generate_icon("alice", Theme::Full140, 4, &none()).unwrap();

        assert_eq!(icon.background, "cyan");
        assert_eq!(icon.cell_edge, 125.0);
        assert_eq!(
            icon.cells.iter().map(|c| c.cell).collect::<Vec<_>>(),
            vec![
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(2, 0),
                Cell::new(2, 3),
                Cell::new(3, 3),
            ]
        );
        assert_eq!(
            fills(&icon),
            vec![
                "indigo",
                "ivory",
                "khaki",
                "lavender",
                "lavenderblush",
                "lawngreen",
                "lemonchiffon",
                "lightblue",
            ]
        );
    }

    #[test]
    fn test_known_icons_other_themes() {
        let bob = generate_icon("bob", Theme::Web16, 2, &none()).unwrap();
        assert_eq!(bob.background, "olive");
        assert_eq!(fills(&bob), vec!["silver", "teal"]);

        let carol = generate_icon("  carol ", Theme::Reds32, 3, &set(&["red", "tomato"])).unwrap();
        assert_eq!(carol.background, "violet");
        assert_eq!(
            fills(&carol),
            vec!["rosybrown", "saddlebrown", "salmon", "sandybrown", "sienna", "tan", "brown"]
        );

        let erin = generate_icon("erin", Theme::Greens33, 3, &none()).unwrap();
        assert_eq!(erin.background, "mediumturquoise");
        assert_eq!(fills(&erin), vec!["darkslategray", "forestgreen", "gray"]);
        let cells: Vec<Cell> = erin.cells.iter().map(|c| c.cell).collect();
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(2, 0), Cell::new(2, 1)]);
    }

    #[test]
    fn test_dave_blues_grid5() {
        let dave = generate_icon("dave", Theme::Blues27, 5, &none()).unwrap();
        assert_eq!(dave.background, "teal");
        assert_eq!(dave.cells.len(), 17);
        assert_eq!(dave.cells[0].fill, "aquamarine");
        assert_eq!(dave.cells[16].fill, "mintcream");
    }

    #[test]
    fn test_determinism() {
        for input in ["alice", "bob", "", "ünïcödé", "a much longer input string"] {
            let a = generate_icon(input, Theme::Full140, 6, &set(&["black"])).unwrap();
            let b = generate_icon(input, Theme::Full140, 6, &set(&["black"])).unwrap();
            assert_eq!(a, b);
            assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            );
        }
    }

    #[test]
    fn test_mirror_symmetry() {
        let icon = generate_icon("symmetry", Theme::Full140, 7, &none()).unwrap();
        let mid = VIEWBOX_EDGE / 2.0;
        let eps = 1e-9;

        for cell in &icon.cells {
            let [tl, tr, bl, br] = cell.placements.map(|p| p.square);
            assert!([tr, bl, br].iter().all(|s| s.size == tl.size));

            // Centres reflect across the midlines
            let centre = |s: Square| (s.x + s.size / 2.0, s.y + s.size / 2.0);
            let (tlx, tly) = centre(tl);
            let (trx, try_) = centre(tr);
            let (blx, bly) = centre(bl);
            let (brx, bry) = centre(br);

            assert!((tlx + trx - 2.0 * mid).abs() < eps);
            assert!((tly - try_).abs() < eps);
            assert!((tly + bly - 2.0 * mid).abs() < eps);
            assert!((tlx - blx).abs() < eps);
            assert!((brx - trx).abs() < eps);
            assert!((bry - bly).abs() < eps);

            // Top-left square stays inside its quadrant
            assert!(tl.x + tl.size <= mid + eps && tl.y + tl.size <= mid + eps);
        }
    }

    #[test]
    fn test_background_never_used_as_fill() {
        for input in ["alice", "bob", "carol", "dave", "erin", "frank", "grace"] {
            for theme in Theme::ALL {
                let icon = generate_icon(input, theme, 4, &none()).unwrap();
                assert!(icon.cells.iter().all(|c| c.fill != icon.background));
            }
        }
    }

    #[test]
    fn test_exclusions_respected() {
        let excluded = set(&["cyan", "indigo", "ivory"]);
        let icon = generate_icon("alice", Theme::Full140, 4, &excluded).unwrap();
        assert!(!excluded.contains(icon.background));
        for cell in &icon.cells {
            assert!(!excluded.contains(cell.fill));
            assert!(Theme::Full140.palette().contains(cell.fill));
        }
    }

    #[test]
    fn test_web16_all_excluded_is_empty_palette() {
        let all: BTreeSet<String> = Theme::Web16
            .palette()
            .colours()
            .iter()
            .map(|c| c.to_string())
            .collect();
        let err = generate_icon("alice", Theme::Web16, 4, &all).unwrap_err();
        assert!(matches!(err, IconError::EmptyPalette { .. }));
    }

    #[test]
    fn test_only_background_left_fails_for_cells() {
        // 15 of 16 excluded: the background takes the last colour, cells have none
        let palette = Theme::Web16.palette();
        let excluded: BTreeSet<String> = palette.colours()[1..]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let err = generate_icon("alice", Theme::Web16, 4, &excluded).unwrap_err();
        assert!(matches!(err, IconError::EmptyPalette { .. }));
    }

    #[test]
    fn test_selection_matches_cells() {
        let icon = generate_icon("alice", Theme::Full140, 4, &none()).unwrap();
        let selection = icon.selection();
        assert_eq!(selection.background, "cyan");
        assert_eq!(selection.fills.len(), icon.cells.len());
        assert_eq!(selection.fills[&1], "indigo");
        assert_eq!(selection.fills[&8], "lightblue");
        assert_eq!(icon.square_count(), 32);
    }

    #[test]
    fn test_invalid_grid() {
        let err = generate_icon("alice", Theme::Full140, 0, &none()).unwrap_err();
        assert!(matches!(err, IconError::InvalidGrid { .. }));
    }

    #[test]
    fn test_request_clean_input() {
        let grid = GridSpec::new(4).unwrap();
        let request = IconRequest::new("  alice \n", Theme::Full140, grid).excluding(["red"]);
        assert_eq!(request.clean_input(), "alice");
        assert!(request.excluded.contains("red"));

        let icon = request.generate().unwrap();
        assert_eq!(icon.digest, Digest::from_input("alice"));
    }
}
