pub mod completions;
pub mod palette;
pub mod plan;
pub mod render;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::compose::IconRequest;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::Verbosity;
use crate::types::{GridSpec, Theme};

/// identigrid - Mirrored grid identity icons from arbitrary strings
#[derive(Parser, Debug)]
#[command(name = "identigrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print a line for every written file
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Print digest, pattern and placement details
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose, self.debug)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an icon as SVG and PNGs
    #[command(alias = "render-icon")]
    Render(render::RenderArgs),

    /// List the colours of a theme
    Palette(palette::PaletteArgs),

    /// Print the drawing instructions for an icon as JSON
    Plan(plan::PlanArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by every command that generates an icon.
#[derive(Args, Debug, Clone, Default)]
pub struct IconOptions {
    /// String to generate an icon for
    pub input: String,

    /// Colour theme (full140, reds32, greens33, blues27, web16)
    #[arg(short = 'c', long = "colors")]
    pub theme: Option<String>,

    /// Grid edge length in cells
    #[arg(short, long)]
    pub grid: Option<u32>,

    /// Colour word never to use (repeatable)
    #[arg(short = 'n', long = "not-color")]
    pub not_color: Vec<String>,

    /// Manifest to read defaults from (default: ./identigrid.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl IconOptions {
    /// Load the manifest this invocation should use.
    pub fn manifest(&self) -> Result<Manifest> {
        Manifest::discover(self.config.as_deref(), Path::new("."))
    }

    /// Merge flags over manifest defaults into a request.
    pub fn resolve(&self, manifest: &Manifest) -> Result<IconRequest> {
        let theme = match self.theme.as_deref().or(manifest.theme.as_deref()) {
            Some(name) => name.parse()?,
            None => Theme::default(),
        };
        let grid = GridSpec::new(self.grid.unwrap_or_else(|| manifest.effective_grid()))?;

        Ok(IconRequest::new(self.input.clone(), theme, grid)
            .excluding(clean_values(&manifest.exclude))
            .excluding(clean_values(&self.not_color)))
    }
}

/// Trimmed repeatable values, skipping `""` placeholders and blanks.
pub(crate) fn clean_values(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && *v != "\"\"")
        .map(str::to_string)
        .collect()
}
