//! Palette command implementation.
//!
//! Prints the named icon palette, or samples the most frequent colours of a
//! PNG (handy for checking rendered icons against the palette).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{IconsetError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{Colour, PALETTE};

/// Print the icon palette, or sample colours from a PNG
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// PNG file to sample colours from
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Maximum number of sampled colours to output
    #[arg(long)]
    pub max: Option<usize>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    match &args.from {
        None => {
            for (name, colour) in PALETTE.swatches() {
                println!("{name}: {colour}");
            }
        }
        Some(path) => {
            let colours = sample(path, args.max)?;
            printer.status(
                "Sampled",
                &format!(
                    "{} from {}",
                    plural(colours.len(), "colour", "colours"),
                    display_path(path)
                ),
            );
            for (i, colour) in colours.iter().enumerate() {
                let name = PALETTE
                    .swatches()
                    .into_iter()
                    .find(|(_, c)| c == colour)
                    .map(|(n, _)| n.to_string())
                    .unwrap_or_else(|| format!("colour-{}", i + 1));
                println!("{name}: {colour}");
            }
        }
    }
    Ok(())
}

/// Distinct non-transparent colours of a PNG, most frequent first.
pub fn sample(path: &Path, max: Option<usize>) -> Result<Vec<Colour>> {
    let img = image::open(path)
        .map_err(|e| IconsetError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    let mut counts: HashMap<[u8; 4], usize> = HashMap::new();
    for pixel in img.pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        *counts.entry(pixel.0).or_insert(0) += 1;
    }

    // Ties broken by value so output is stable.
    let mut colours: Vec<([u8; 4], usize)> = counts.into_iter().collect();
    colours.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    if let Some(max) = max {
        colours.truncate(max);
    }

    Ok(colours.into_iter().map(|(rgba, _)| Colour::from(rgba)).collect())
}
