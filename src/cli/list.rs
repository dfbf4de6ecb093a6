//! List command implementation.
//!
//! Prints catalog output paths in registry order to stdout.

use clap::Args;

use crate::discovery::relative_posix;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::{standard, ICON_SET_DIR};

/// List catalog output paths
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list entries of the in-app icon set
    #[arg(long)]
    pub icon_set: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let catalog = standard()?;

    let mut count = 0;
    for path in catalog.paths() {
        if args.icon_set && !path.starts_with(ICON_SET_DIR) {
            continue;
        }
        println!("{}", relative_posix(path, std::path::Path::new("")));
        count += 1;
    }

    printer.info("Listed", &plural(count, "icon", "icons"));
    Ok(())
}
