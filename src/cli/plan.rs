use clap::Args;

use crate::compose::RenderInstructionSet;
use crate::error::{IconError, Result};
use crate::output::{plural, Printer};

use super::IconOptions;

/// Print the drawing instructions for an icon as JSON
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub icon: IconOptions,
}

pub fn run(args: PlanArgs, printer: &Printer) -> Result<()> {
    let manifest = args.icon.manifest()?;
    let icon = args.icon.resolve(&manifest)?.generate()?;

    printer.status(
        "Planned",
        &format!(
            "{} on {}",
            plural(icon.square_count(), "square", "squares"),
            icon.background
        ),
    );
    println!("{}", to_json(&icon)?);

    Ok(())
}

/// Pretty-printed JSON for an instruction set.
pub fn to_json(icon: &RenderInstructionSet) -> Result<String> {
    serde_json::to_string_pretty(icon).map_err(|e| IconError::Render {
        message: format!("Failed to serialize plan: {}", e),
        help: None,
    })
}
