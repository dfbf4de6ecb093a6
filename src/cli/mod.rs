pub mod build;
pub mod completions;
pub mod init;
pub mod list;
pub mod optimize;
pub mod palette;

use clap::{Parser, Subcommand};

/// iconset - App icon renderer and web asset optimizer
#[derive(Parser, Debug)]
#[command(name = "iconset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every icon in the catalog to PNG
    Build(build::BuildArgs),

    /// Write lossless web variants of PNG assets
    Optimize(optimize::OptimizeArgs),

    /// List catalog output paths
    List(list::ListArgs),

    /// Print the icon palette, or sample colours from a PNG
    Palette(palette::PaletteArgs),

    /// Initialize an iconset project (generates iconset.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
