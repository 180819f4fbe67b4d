//! Render command implementation.
//!
//! Generates one icon and writes it as an SVG plus a PNG per output size.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::compose::IconRequest;
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer, Verbosity};
use crate::render::{
    output_sizes, write_png, CoverageRasterizer, Rasterizer, SvgRenderer, VectorRenderer,
};
use crate::types::PatternIndex;

use super::{clean_values, IconOptions};

/// Render an icon as SVG and PNGs
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub icon: IconOptions,

    /// Extra PNG edge length in pixels (repeatable)
    #[arg(short = 'i', long)]
    pub include_png_size: Vec<String>,

    /// Root directory for icon folders (default: manifest or "output")
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Files written for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    pub dir: PathBuf,
    pub svg: PathBuf,
    pub pngs: Vec<PathBuf>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let manifest = args.icon.manifest()?;
    let request = args.icon.resolve(&manifest)?;

    let extra = parse_sizes(&args.include_png_size)?;
    let sizes = output_sizes(manifest.sizes.iter().copied().chain(extra))?;

    let root = args.output.unwrap_or_else(|| manifest.output.clone());
    let stamp = if manifest.timestamp_dirs {
        Some(timestamp()?)
    } else {
        None
    };

    let rendered = render_icon(&request, &root, stamp.as_deref(), &sizes, printer)?;

    printer.success(
        "Finished",
        &format!(
            "{} and 1 SVG in {}",
            plural(rendered.pngs.len(), "PNG", "PNGs"),
            printer.cyan(&display_path(&rendered.dir))
        ),
    );

    Ok(())
}

/// Generate `request` and write its files under `root`.
pub fn render_icon(
    request: &IconRequest,
    root: &Path,
    stamp: Option<&str>,
    sizes: &BTreeSet<u32>,
    printer: &Printer,
) -> Result<RenderedIcon> {
    let icon = request.generate()?;

    if printer.enabled(Verbosity::Debug) {
        printer.debug("Digest", &icon.digest.to_hex());
        let pattern = PatternIndex::derive(&icon.digest, &icon.grid);
        printer.debug("Pattern", &pattern.to_string());
        let cells: Vec<String> = icon.cells.iter().map(|c| c.cell.to_string()).collect();
        printer.debug("Cells", &cells.join(" "));
        printer.debug(
            "Colours",
            &format!("{} on {}", plural(icon.cells.len(), "cell", "cells"), icon.background),
        );
    }

    let name = safe_name(request.clean_input());
    let dir = match stamp {
        Some(stamp) => root.join(format!("{}_{}", stamp, name)),
        None => root.join(&name),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| IconError::Io {
            path: dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let vector = SvgRenderer::new().render(&icon)?;
    for rect in &vector.rects {
        printer.debug(
            "Square",
            &format!("{} at ({}, {}) size {}", rect.fill, rect.x, rect.y, rect.width),
        );
    }

    let svg = dir.join(format!("{}_{}.svg", name, icon.digest.to_hex()));
    vector.write_svg(&svg)?;
    printer.status("Writing", &display_path(&svg));

    let rasterizer = CoverageRasterizer::new();
    let mut pngs = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let img = rasterizer.rasterize(&vector, size)?;
        let path = dir.join(format!("{}px.png", size));
        write_png(&img, &path)?;
        printer.status("Writing", &display_path(&path));
        pngs.push(path);
    }

    Ok(RenderedIcon { dir, svg, pngs })
}

/// Parse `--include-png-size` values, ignoring `""` placeholders.
fn parse_sizes(values: &[String]) -> Result<Vec<u32>> {
    clean_values(values)
        .into_iter()
        .map(|v| {
            v.parse::<u32>().map_err(|_| IconError::Parse {
                message: format!("Invalid PNG size: {}", v),
                help: Some("Sizes are edge lengths in pixels, e.g. -i 200".to_string()),
            })
        })
        .collect()
}

/// Local time as `YYYYmmddHHMMSS`, falling back to UTC when the offset is unknown.
fn timestamp() -> Result<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!(
        "[year][month][day][hour][minute][second]"
    ))
    .map_err(|e| IconError::Render {
        message: format!("Failed to format timestamp: {}", e),
        help: None,
    })
}

/// Replace characters that are unsafe in file names with `_`.
fn safe_name(input: &str) -> String {
    let name: String = input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // Never produce "", "." or ".."
    if name.chars().all(|c| c == '.') {
        "_".repeat(name.len().max(1))
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GridSpec, Theme};
    use tempfile::tempdir;

    fn quiet() -> Printer {
        Printer::plain(Verbosity::Quiet)
    }

    #[test]
    fn test_render_icon_files() {
        let dir = tempdir().unwrap();
        let request = IconRequest::new("bob", Theme::Web16, GridSpec::new(2).unwrap());
        let sizes = output_sizes([40]).unwrap();

        let rendered =
            render_icon(&request, dir.path(), Some("20240102030405"), &sizes, &quiet()).unwrap();

        assert_eq!(rendered.dir, dir.path().join("20240102030405_bob"));
        assert_eq!(
            rendered.svg.file_name().unwrap().to_str().unwrap(),
            "bob_81b637d8fcd2c6da6359e6963113a1170de795e4b725b84d1e0b4cfd9ec58ce9.svg"
        );
        assert!(rendered.svg.is_file());

        let names: Vec<_> = rendered
            .pngs
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["24px.png", "32px.png", "40px.png", "64px.png", "128px.png", "512px.png"]
        );

        let img = image::open(rendered.dir.join("40px.png")).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (40, 40));
        // olive background at the centre, silver in the corners
        assert_eq!(img.get_pixel(20, 20).0, [128, 128, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [192, 192, 192, 255]);
    }

    #[test]
    fn test_render_icon_without_timestamp() {
        let dir = tempdir().unwrap();
        let request = IconRequest::new("  a/b c ", Theme::Web16, GridSpec::new(2).unwrap());
        let sizes = output_sizes([]).unwrap();

        let rendered = render_icon(&request, dir.path(), None, &sizes, &quiet()).unwrap();
        assert_eq!(rendered.dir, dir.path().join("a_b_c"));
        assert_eq!(rendered.pngs.len(), 5);
    }

    #[test]
    fn test_parse_sizes() {
        let values = vec!["200".to_string(), "\"\"".to_string(), "".to_string()];
        assert_eq!(parse_sizes(&values).unwrap(), vec![200]);
        assert!(parse_sizes(&["big".to_string()]).is_err());
        // parses, then fails the size bound rather than allocating
        let huge = parse_sizes(&["4000000000".to_string()]).unwrap();
        assert!(output_sizes(huge).is_err());
    }

    #[test]
    fn test_safe_name() {
        assert_eq!(safe_name("alice"), "alice");
        assert_eq!(safe_name("user@example.com"), "user_example.com");
        assert_eq!(safe_name("../etc"), ".._etc");
        assert_eq!(safe_name(".."), "__");
        assert_eq!(safe_name(""), "_");
    }

    #[test]
    fn test_timestamp_shape() {
        let stamp = timestamp().unwrap();
        assert_eq!(stamp.len(), 14);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
