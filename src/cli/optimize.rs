//! Optimize command implementation.
//!
//! Writes `.web.png` siblings for every PNG under the web root.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, relative_posix, scan_web_sources};
use crate::error::Result;
use crate::optimize::{human_size, optimize_all};
use crate::output::{display_path, plural, Printer};

/// Write lossless web variants of PNG assets
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Project root (where iconset.yaml lives)
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Directory to scan, relative to the project (overrides the manifest)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Write a JSON report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub fn run(args: OptimizeArgs, printer: &Printer) -> Result<()> {
    let mut project = discover(&args.project)?;
    if let Some(root) = args.root {
        project.manifest.web.root = root;
    }
    let web = &project.manifest.web;

    printer.status("Optimizing", &display_path(&project.web_root()));
    let sources = scan_web_sources(&project.root, web)?;

    let report = optimize_all(&sources, &web.suffix, |file| {
        let verb = if file.fallback { "Copied" } else { "Optimized" };
        printer.status(
            verb,
            &format!(
                "{} -> {}: {} -> {} ({:.1}% smaller)",
                relative_posix(&file.source, &project.root),
                relative_posix(&file.variant, &project.root),
                human_size(file.before),
                human_size(file.after),
                file.reduction()
            ),
        );
    })?;

    printer.success(
        "Total",
        &format!(
            "({}): {} -> {} ({:.1}% smaller)",
            plural(report.files.len(), "file", "files"),
            human_size(report.total_before()),
            human_size(report.total_after()),
            report.reduction()
        ),
    );

    if let Some(path) = args.report {
        report.write_json(&path)?;
        printer.info("Wrote", &display_path(&path));
    }

    Ok(())
}
