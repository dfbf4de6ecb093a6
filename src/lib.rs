//! iconset - App icon renderer and web asset optimizer
//!
//! A library for rendering a fixed catalog of vector-style application icons
//! to antialiased PNG files, and for producing lossless web variants of PNG
//! assets.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod icons;
pub mod optimize;
pub mod output;
pub mod registry;
pub mod render;
pub mod types;

pub use discovery::{discover, Manifest, Project, WebConfig};
pub use error::{IconsetError, Result};
pub use optimize::{optimize, optimize_all, OptimizeReport, Optimized};
pub use registry::{standard, Catalog, CatalogBuilder, CatalogEntry};
pub use render::{downsample, persist, render_catalog, write_png, Canvas, Joint, Style};
pub use types::{Colour, Palette, PALETTE};
