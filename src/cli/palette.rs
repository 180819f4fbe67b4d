use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{plural, Printer};
use crate::types::{Colour, Theme};

use super::clean_values;

/// List the colours of a theme
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Theme to list (default: manifest theme or full140)
    pub theme: Option<String>,

    /// Colour word to leave out (repeatable)
    #[arg(short = 'n', long = "not-color")]
    pub not_color: Vec<String>,

    /// Manifest to read defaults from (default: ./identigrid.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::discover(args.config.as_deref(), Path::new("."))?;
    let theme: Theme = match args.theme.as_deref().or(manifest.theme.as_deref()) {
        Some(name) => name.parse()?,
        None => Theme::default(),
    };

    let mut excluded = clean_values(&manifest.exclude);
    excluded.extend(clean_values(&args.not_color));

    let lines = palette_lines(theme, &excluded)?;
    if lines.is_empty() {
        printer.warning("Empty", &format!("every colour in {} is excluded", theme));
    } else {
        printer.status(
            "Listing",
            &format!("{} from {}", plural(lines.len(), "colour", "colours"), theme),
        );
    }

    // Palette lines go to stdout
    for line in &lines {
        println!("{}", line);
    }

    Ok(())
}

/// `name #RRGGBB` for every colour left in `theme` after `excluded`.
pub fn palette_lines(theme: Theme, excluded: &BTreeSet<String>) -> Result<Vec<String>> {
    theme
        .palette()
        .filter(excluded)
        .colours()
        .iter()
        .map(|name| Ok(format!("{} {}", name, Colour::from_name(name)?)))
        .collect()
}
