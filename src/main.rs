use clap::Parser;
use identigrid::cli::{Cli, Commands};
use identigrid::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.verbosity());

    match cli.command {
        Commands::Render(args) => identigrid::cli::render::run(args, &printer)?,
        Commands::Palette(args) => identigrid::cli::palette::run(args, &printer)?,
        Commands::Plan(args) => identigrid::cli::plan::run(args, &printer)?,
        Commands::Completions(args) => identigrid::cli::completions::run(args)?,
    }

    Ok(())
}
