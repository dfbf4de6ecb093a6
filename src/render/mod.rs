//! Rendering module for iconset.
//!
//! This module handles the supersampled drawing surface, coordinate scaling
//! from the logical design grid, and the downsample-and-write step.

mod batch;
mod canvas;
mod glyph;
mod png;
pub mod scale;

pub use batch::render_catalog;
pub use canvas::{Canvas, Joint, Style};
pub use png::{downsample, persist, write_png};
pub use scale::{bbox, pt, stroke, w, BBox, Point, CANVAS, LOGICAL_SIZE, SUPERSAMPLE};
