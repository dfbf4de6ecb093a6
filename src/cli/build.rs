//! Build command implementation.
//!
//! Renders the standard catalog into the project's output directory.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::registry::standard;
use crate::render::render_catalog;

/// Render every icon in the catalog to PNG
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project root (where iconset.yaml lives)
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Number of icons rendered in parallel
    #[arg(long, short, default_value_t = 1)]
    pub jobs: usize,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let project = discover(&args.project)?;
    let output = args.output.unwrap_or_else(|| project.output_dir());
    let catalog = standard()?;

    printer.status(
        "Rendering",
        &format!(
            "{} to {}",
            plural(catalog.len(), "icon", "icons"),
            display_path(&output)
        ),
    );

    let written = render_catalog(&catalog, &output, args.jobs, |path| {
        printer.status("Generated", &path.display().to_string());
    })?;

    printer.success(
        "Finished",
        &format!("{} in {}", plural(written, "icon", "icons"), display_path(&output)),
    );

    Ok(())
}
