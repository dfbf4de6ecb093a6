use clap::Parser;
use iconset::cli::{Cli, Commands};
use iconset::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => iconset::cli::build::run(args, &printer)?,
        Commands::Optimize(args) => iconset::cli::optimize::run(args, &printer)?,
        Commands::List(args) => iconset::cli::list::run(args, &printer)?,
        Commands::Palette(args) => iconset::cli::palette::run(args, &printer)?,
        Commands::Init(args) => iconset::cli::init::run(args, &printer)?,
        Commands::Completions(args) => iconset::cli::completions::run(args)?,
    }

    Ok(())
}
