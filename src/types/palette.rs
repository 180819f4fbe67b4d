//! Palette registry for themed colour-word collections.
//!
//! Five palettes are available. `full140` and `web16` are literal tables; the
//! red, green and blue palettes are derived from `full140` by substring match
//! plus a curated list of colours whose names don't say what they are.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{IconError, Result};

use super::Digest;

/// The 140 SVG 1.1 colour keywords (without the `grey` spellings).
const SVG_COLOURS: [&str; 140] = [
    "aliceblue",
    "antiquewhite",
    "aqua",
    "aquamarine",
    "azure",
    "beige",
    "bisque",
    "black",
    "blanchedalmond",
    "blue",
    "blueviolet",
    "brown",
    "burlywood",
    "cadetblue",
    "chartreuse",
    "chocolate",
    "coral",
    "cornflowerblue",
    "cornsilk",
    "crimson",
    "cyan",
    "darkblue",
    "darkcyan",
    "darkgoldenrod",
    "darkgray",
    "darkgreen",
    "darkkhaki",
    "darkmagenta",
    "darkolivegreen",
    "darkorange",
    "darkorchid",
    "darkred",
    "darksalmon",
    "darkseagreen",
    "darkslateblue",
    "darkslategray",
    "darkturquoise",
    "darkviolet",
    "deeppink",
    "deepskyblue",
    "dimgray",
    "dodgerblue",
    "firebrick",
    "floralwhite",
    "forestgreen",
    "fuchsia",
    "gainsboro",
    "ghostwhite",
    "gold",
    "goldenrod",
    "gray",
    "green",
    "greenyellow",
    "honeydew",
    "hotpink",
    "indianred",
    "indigo",
    "ivory",
    "khaki",
    "lavender",
    "lavenderblush",
    "lawngreen",
    "lemonchiffon",
    "lightblue",
    "lightcoral",
    "lightcyan",
    "lightgoldenrodyellow",
    "lightgray",
    "lightgreen",
    "lightpink",
    "lightsalmon",
    "lightseagreen",
    "lightskyblue",
    "lightslategray",
    "lightsteelblue",
    "lightyellow",
    "lime",
    "limegreen",
    "linen",
    "magenta",
    "maroon",
    "mediumaquamarine",
    "mediumblue",
    "mediumorchid",
    "mediumpurple",
    "mediumseagreen",
    "mediumslateblue",
    "mediumspringgreen",
    "mediumturquoise",
    "mediumvioletred",
    "midnightblue",
    "mintcream",
    "mistyrose",
    "moccasin",
    "navajowhite",
    "navy",
    "oldlace",
    "olive",
    "olivedrab",
    "orange",
    "orangered",
    "orchid",
    "palegoldenrod",
    "palegreen",
    "paleturquoise",
    "palevioletred",
    "papayawhip",
    "peachpuff",
    "peru",
    "pink",
    "plum",
    "powderblue",
    "purple",
    "red",
    "rosybrown",
    "royalblue",
    "saddlebrown",
    "salmon",
    "sandybrown",
    "seagreen",
    "seashell",
    "sienna",
    "silver",
    "skyblue",
    "slateblue",
    "slategray",
    "snow",
    "springgreen",
    "steelblue",
    "tan",
    "teal",
    "thistle",
    "tomato",
    "turquoise",
    "violet",
    "wheat",
    "white",
    "whitesmoke",
    "yellow",
    "yellowgreen",
];

/// The 16 HTML 4.01 colour names.
const WEB_COLOURS: [&str; 16] = [
    "aqua", "black", "blue", "fuchsia", "gray", "green", "lime", "maroon", "navy", "olive",
    "purple", "red", "silver", "teal", "white", "yellow",
];

const CURATED_REDS: [&str; 26] = [
    "brown",
    "coral",
    "crimson",
    "darkmagenta",
    "darksalmon",
    "deeppink",
    "firebrick",
    "fuchsia",
    "hotpink",
    "lightcoral",
    "lightpink",
    "lightsalmon",
    "maroon",
    "orange",
    "orchid",
    "pink",
    "plum",
    "purple",
    "rosybrown",
    "saddlebrown",
    "salmon",
    "sandybrown",
    "sienna",
    "tan",
    "tomato",
    "violet",
];

const CURATED_GREENS: [&str; 17] = [
    "aquamarine",
    "cadetblue",
    "darkcyan",
    "darkslategray",
    "gray",
    "khaki",
    "lightgoldenrodyellow",
    "lightgray",
    "lightslategray",
    "lime",
    "mediumaquamarine",
    "mediumturquoise",
    "olive",
    "olivedrab",
    "teal",
    "turquoise",
    "yellowgreen",
];

const CURATED_BLUES: [&str; 8] = [
    "aqua",
    "aquamarine",
    "indigo",
    "navy",
    "mintcream",
    "paleturquoise",
    "teal",
    "turquoise",
];

/// A named palette theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Full140,
    Reds32,
    Greens33,
    Blues27,
    Web16,
}

impl Theme {
    /// Every theme, in registry order.
    pub const ALL: [Theme; 5] = [
        Theme::Full140,
        Theme::Reds32,
        Theme::Greens33,
        Theme::Blues27,
        Theme::Web16,
    ];

    /// Short identifier used on the command line and in manifests.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Full140 => "full140",
            Theme::Reds32 => "reds32",
            Theme::Greens33 => "greens33",
            Theme::Blues27 => "blues27",
            Theme::Web16 => "web16",
        }
    }

    /// Long identifier accepted for compatibility with older icon scripts.
    pub fn legacy_name(self) -> &'static str {
        match self {
            Theme::Full140 => "svg_colors_140",
            Theme::Reds32 => "svg_reds_32",
            Theme::Greens33 => "svg_greens_33",
            Theme::Blues27 => "svg_blues_27",
            Theme::Web16 => "web_colors_16",
        }
    }

    /// The palette for this theme.
    pub fn palette(self) -> &'static Palette {
        Palette::lookup(self)
    }
}

impl FromStr for Theme {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == s || theme.legacy_name() == s)
            .ok_or_else(|| IconError::InvalidTheme {
                name: s.to_string(),
                help: Some(format!(
                    "Available themes: {}",
                    Theme::ALL.map(Theme::name).join(", ")
                )),
            })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered, duplicate-free collection of colour words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Theme this palette belongs to
    pub theme: Theme,

    colours: Vec<&'static str>,
}

struct Registry {
    full: Palette,
    reds: Palette,
    greens: Palette,
    blues: Palette,
    web: Palette,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| Registry {
    full: Palette::from_words(Theme::Full140, SVG_COLOURS),
    reds: Palette::derived(Theme::Reds32, "red", &CURATED_REDS),
    greens: Palette::derived(Theme::Greens33, "green", &CURATED_GREENS),
    blues: Palette::derived(Theme::Blues27, "blue", &CURATED_BLUES),
    web: Palette::from_words(Theme::Web16, WEB_COLOURS),
});

impl Palette {
    /// Get the static palette for a theme.
    pub fn lookup(theme: Theme) -> &'static Palette {
        let registry = &*REGISTRY;
        match theme {
            Theme::Full140 => &registry.full,
            Theme::Reds32 => &registry.reds,
            Theme::Greens33 => &registry.greens,
            Theme::Blues27 => &registry.blues,
            Theme::Web16 => &registry.web,
        }
    }

    /// Sorted, keeping repeated words. A repeat weights selection towards
    /// that colour, and existing icons depend on those weights.
    fn from_words(theme: Theme, words: impl IntoIterator<Item = &'static str>) -> Self {
        let mut colours: Vec<&'static str> = words.into_iter().collect();
        colours.sort_unstable();
        Self { theme, colours }
    }

    /// Every full-palette colour containing `needle`, plus the curated extras.
    ///
    /// A curated word that also contains `needle` appears twice.
    fn derived(theme: Theme, needle: &str, curated: &[&'static str]) -> Self {
        let obvious = SVG_COLOURS.into_iter().filter(|c| c.contains(needle));
        Self::from_words(theme, obvious.chain(curated.iter().copied()))
    }

    /// Colour words in lexicographic order.
    pub fn colours(&self) -> &[&'static str] {
        &self.colours
    }

    /// Check whether a colour word belongs to this palette.
    pub fn contains(&self, colour: &str) -> bool {
        self.colours.binary_search_by(|c| (*c).cmp(colour)).is_ok()
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Remove every copy of each excluded colour. The result may be empty.
    pub fn filter(&self, excluded: &BTreeSet<String>) -> EffectivePalette {
        EffectivePalette {
            theme: self.theme,
            colours: self
                .colours
                .iter()
                .copied()
                .filter(|c| !excluded.contains(*c))
                .collect(),
            excluded: excluded.iter().cloned().collect(),
        }
    }
}

/// A palette after exclusions, used for exactly one colour selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectivePalette {
    theme: Theme,
    colours: Vec<&'static str>,
    excluded: Vec<String>,
}

impl EffectivePalette {
    pub fn colours(&self) -> &[&'static str] {
        &self.colours
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Pick the colour at `digest mod len`.
    pub fn select(&self, digest: &Digest) -> Result<&'static str> {
        self.ensure_not_empty()?;
        Ok(self.colours[digest.select_index(self.colours.len())?])
    }

    /// Pick the colour at `(digest mod len + offset) mod len`.
    pub fn select_with_offset(&self, digest: &Digest, offset: usize) -> Result<&'static str> {
        self.ensure_not_empty()?;
        Ok(self.colours[digest.select_index_with_offset(self.colours.len(), offset)?])
    }

    fn ensure_not_empty(&self) -> Result<()> {
        if self.colours.is_empty() {
            return Err(IconError::EmptyPalette {
                theme: self.theme.name().to_string(),
                excluded: self.excluded.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    fn excluded(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_full_palette() {
        let palette = Palette::lookup(Theme::Full140);
        assert_eq!(palette.len(), 140);
        assert_eq!(palette.colours()[0], "aliceblue");
        assert_eq!(palette.colours()[139], "yellowgreen");
        assert!(!palette.contains("rebeccapurple"));
    }

    #[test]
    fn test_web_palette() {
        let palette = Palette::lookup(Theme::Web16);
        assert_eq!(palette.colours(), &WEB_COLOURS[..]);
    }

    #[test]
    fn test_reds_palette() {
        let palette = Palette::lookup(Theme::Reds32);
        assert_eq!(
            palette.colours(),
            &[
                "brown", "coral", "crimson", "darkmagenta", "darkred", "darksalmon", "deeppink",
                "firebrick", "fuchsia", "hotpink", "indianred", "lightcoral", "lightpink",
                "lightsalmon", "maroon", "mediumvioletred", "orange", "orangered", "orchid",
                "palevioletred", "pink", "plum", "purple", "red", "rosybrown", "saddlebrown",
                "salmon", "sandybrown", "sienna", "tan", "tomato", "violet",
            ][..]
        );
        assert_eq!(palette.len(), 32);
    }

    #[test]
    fn test_greens_palette_keeps_repeats() {
        // yellowgreen matches "green" and is also curated
        let palette = Palette::lookup(Theme::Greens33);
        assert_eq!(
            palette.colours(),
            &[
                "aquamarine", "cadetblue", "darkcyan", "darkgreen", "darkolivegreen",
                "darkseagreen", "darkslategray", "forestgreen", "gray", "green", "greenyellow",
                "khaki", "lawngreen", "lightgoldenrodyellow", "lightgray", "lightgreen",
                "lightseagreen", "lightslategray", "lime", "limegreen", "mediumaquamarine",
                "mediumseagreen", "mediumspringgreen", "mediumturquoise", "olive", "olivedrab",
                "palegreen", "seagreen", "springgreen", "teal", "turquoise", "yellowgreen",
                "yellowgreen",
            ][..]
        );
        assert_eq!(palette.len(), 33);
    }

    #[test]
    fn test_blues_palette() {
        let palette = Palette::lookup(Theme::Blues27);
        assert_eq!(
            palette.colours(),
            &[
                "aliceblue", "aqua", "aquamarine", "blue", "blueviolet", "cadetblue",
                "cornflowerblue", "darkblue", "darkslateblue", "deepskyblue", "dodgerblue",
                "indigo", "lightblue", "lightskyblue", "lightsteelblue", "mediumblue",
                "mediumslateblue", "midnightblue", "mintcream", "navy", "paleturquoise",
                "powderblue", "royalblue", "skyblue", "slateblue", "steelblue", "teal",
                "turquoise",
            ][..]
        );
        assert_eq!(palette.len(), 28);
    }

    #[test]
    fn test_derived_palettes_are_subsets_of_full() {
        let full = Palette::lookup(Theme::Full140);
        for theme in Theme::ALL {
            let palette = Palette::lookup(theme);
            assert!(palette.colours().iter().all(|c| full.contains(c)), "{}", theme);
            assert!(palette.colours().windows(2).all(|w| w[0] <= w[1]), "{}", theme);
        }
    }

    #[test]
    fn test_every_colour_word_resolves() {
        for colour in Palette::lookup(Theme::Full140).colours() {
            assert!(Colour::from_name(colour).is_ok(), "{}", colour);
        }
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("full140".parse::<Theme>().unwrap(), Theme::Full140);
        assert_eq!("svg_blues_27".parse::<Theme>().unwrap(), Theme::Blues27);
        assert_eq!(" web16 ".parse::<Theme>().unwrap(), Theme::Web16);
    }

    #[test]
    fn test_theme_from_str_unknown() {
        let err = "purples".parse::<Theme>().unwrap_err();
        assert!(matches!(err, IconError::InvalidTheme { ref name, .. } if name == "purples"));
        assert!("FULL140".parse::<Theme>().is_err());
    }

    #[test]
    fn test_filter_removes_exact_matches() {
        let palette = Palette::lookup(Theme::Web16);
        let effective = palette.filter(&excluded(&["red", "Blue", "navy", "not-a-colour"]));

        assert_eq!(effective.len(), 14);
        assert!(!effective.colours().contains(&"red"));
        assert!(!effective.colours().contains(&"navy"));
        // Matching is case-sensitive
        assert!(effective.colours().contains(&"blue"));
    }

    #[test]
    fn test_filter_closure() {
        let exclusions = excluded(&["aqua", "teal", "navy", "crimson", "lime"]);
        for theme in Theme::ALL {
            let palette = Palette::lookup(theme);
            let effective = palette.filter(&exclusions);
            for colour in effective.colours() {
                assert!(palette.contains(colour));
                assert!(!exclusions.contains(*colour));
            }
            assert!(effective.colours().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_filter_removes_every_repeat() {
        let palette = Palette::lookup(Theme::Greens33);
        let effective = palette.filter(&excluded(&["yellowgreen"]));
        assert_eq!(effective.len(), 31);
        assert!(!effective.colours().contains(&"yellowgreen"));
    }

    #[test]
    fn test_select_from_empty_palette() {
        let palette = Palette::lookup(Theme::Web16);
        let everything: BTreeSet<String> = WEB_COLOURS.iter().map(|c| c.to_string()).collect();
        let effective = palette.filter(&everything);
        assert!(effective.is_empty());

        let digest = Digest::from_input("anything");
        let err = effective.select(&digest).unwrap_err();
        assert!(matches!(err, IconError::EmptyPalette { ref theme, .. } if theme == "web16"));
        assert!(effective.select_with_offset(&digest, 1).is_err());
    }
}
