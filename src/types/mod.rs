//! Core value types for iconset.
//!
//! - `Colour` - straight-alpha RGBA colour values
//! - `Palette` - the named semantic colours every icon draws with

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::{Palette, PALETTE};
