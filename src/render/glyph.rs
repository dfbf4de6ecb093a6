//! Built-in stroke font for single-glyph text.
//!
//! Glyphs are described in em units with the origin at the top-left of the
//! glyph cell, so rendering never depends on fonts installed on the machine.

/// Horizontal advance per glyph, in em.
pub const ADVANCE: f32 = 0.6;

/// Stroke weight, in em.
pub const WEIGHT: f32 = 0.12;

/// One stroke of a glyph outline, in em units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphStroke {
    /// Circular arc; angles in degrees, clockwise from 3 o'clock.
    Arc {
        cx: f32,
        cy: f32,
        r: f32,
        start: f32,
        end: f32,
    },
    /// Open polyline.
    Polyline(&'static [(f32, f32)]),
    /// Filled dot.
    Dot { cx: f32, cy: f32, r: f32 },
}

const QUESTION: &[GlyphStroke] = &[
    GlyphStroke::Arc {
        cx: 0.30,
        cy: 0.30,
        r: 0.19,
        start: 180.0,
        end: 420.0,
    },
    GlyphStroke::Polyline(&[(0.395, 0.4645), (0.30, 0.56), (0.30, 0.68)]),
    GlyphStroke::Dot {
        cx: 0.30,
        cy: 0.86,
        r: 0.075,
    },
];

const EXCLAMATION: &[GlyphStroke] = &[
    GlyphStroke::Polyline(&[(0.30, 0.10), (0.30, 0.68)]),
    GlyphStroke::Dot {
        cx: 0.30,
        cy: 0.86,
        r: 0.075,
    },
];

/// Look up the strokes for a glyph.
pub fn strokes(ch: char) -> Option<&'static [GlyphStroke]> {
    match ch {
        '?' => Some(QUESTION),
        '!' => Some(EXCLAMATION),
        _ => None,
    }
}
