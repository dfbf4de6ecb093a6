//! Lyrics sheets, session stacks and other page-like glyphs.

use crate::error::Result;
use crate::render::{bbox, pt, stroke, w, Canvas, Joint, Style};
use crate::types::PALETTE;

/// Lyrics sheet with a beamed note.
pub fn lyrics() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    c.rounded_rect(bbox(108, 80, 336, 426), w(28), Style::outline(p.ink, stroke(34)))?;
    c.line(&[pt(142, 170), pt(280, 170)], p.mist, stroke(26), Joint::Miter)?;
    c.line(&[pt(142, 230), pt(280, 230)], p.mist, stroke(26), Joint::Miter)?;
    c.line(&[pt(142, 290), pt(240, 290)], p.mist, stroke(26), Joint::Miter)?;
    c.line(
        &[pt(330, 174), pt(426, 142), pt(426, 288)],
        p.accent,
        stroke(30),
        Joint::Round,
    )?;
    c.ellipse(bbox(298, 300, 352, 354), Style::fill(p.accent))?;
    c.ellipse(bbox(394, 268, 448, 322), Style::fill(p.accent))?;
    Ok(c)
}

/// Three stacked cards.
pub fn sessions() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    let s = stroke(30);
    c.rounded_rect(bbox(130, 132, 318, 390), w(24), Style::outline(p.mist, s))?;
    c.rounded_rect(bbox(176, 96, 364, 354), w(24), Style::outline(p.ink, s))?;
    c.rounded_rect(bbox(222, 62, 410, 320), w(24), Style::outline(p.ink, s))?;
    for (y, x1) in [(142, 374), (198, 360), (254, 338)] {
        c.line(&[pt(252, y), pt(x1, y)], p.mist, stroke(20), Joint::Miter)?;
    }
    Ok(c)
}

/// Clipboard with a play button and a question mark.
pub fn howto() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    c.rounded_rect(bbox(110, 92, 402, 424), w(34), Style::outline(p.ink, stroke(30)))?;
    c.rounded_rect(bbox(198, 58, 314, 118), w(18), Style::outline(p.ink, stroke(24)))?;
    for (y, x1) in [(192, 292), (246, 272), (300, 292)] {
        c.line(&[pt(156, y), pt(x1, y)], p.mist, stroke(20), Joint::Miter)?;
    }
    c.ellipse(bbox(286, 174, 404, 292), Style::outline(p.ink, stroke(20)))?;
    c.polygon(&[pt(330, 208), pt(330, 258), pt(372, 233)], Style::fill(p.accent))?;
    c.text(pt(382, 94), "?", p.warm, w(82))?;
    Ok(c)
}

/// Phone between two circular sync arrows.
pub fn lyrics_sync() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    let s = stroke(28);
    c.rounded_rect(bbox(194, 174, 318, 334), w(20), Style::outline(p.ink, s))?;
    c.arc(bbox(70, 70, 442, 442), 35.0, 170.0, p.ink, s)?;
    c.polygon(&[pt(420, 120), pt(462, 120), pt(438, 160)], Style::fill(p.ink))?;
    c.arc(bbox(70, 70, 442, 442), 215.0, 350.0, p.ink, s)?;
    c.polygon(&[pt(92, 394), pt(132, 394), pt(108, 430)], Style::fill(p.ink))?;
    Ok(c)
}

/// Three arrows of increasing length: muted, accent, warm.
pub fn lyrics_flow() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    // (y, shaft end, head length, head half-height, shaft colour, head colour)
    let rows = [
        (170, 290, 62, 24, p.mist, p.mist),
        (256, 330, 64, 26, p.ink, p.accent),
        (340, 370, 64, 26, p.mist, p.warm),
    ];
    for (y, x, len, half, shaft, head) in rows {
        c.line(&[pt(98, y), pt(x, y)], shaft, stroke(24), Joint::Miter)?;
        c.polygon(&[pt(x, y - half), pt(x + len, y), pt(x, y + half)], Style::fill(head))?;
    }
    Ok(c)
}

/// Empty sheet and a note, struck through.
pub fn no_song() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    c.rounded_rect(bbox(120, 96, 318, 394), w(24), Style::outline(p.mist, stroke(26)))?;
    c.line(
        &[pt(338, 170), pt(418, 144), pt(418, 258)],
        p.accent,
        stroke(20),
        Joint::Round,
    )?;
    c.ellipse(bbox(312, 274, 358, 320), Style::fill(p.accent))?;
    c.line(&[pt(118, 402), pt(404, 108)], p.warm, stroke(22), Joint::Miter)?;
    Ok(c)
}
