//! Transport and status glyphs.

use crate::error::Result;
use crate::render::{bbox, pt, stroke, w, Canvas, Joint, Style};
use crate::types::PALETTE;

/// Ring with a filled centre, both in the alert hue.
pub fn record() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    c.ellipse(bbox(108, 108, 404, 404), Style::outline(p.alert, stroke(36)))?;
    c.ellipse(bbox(194, 194, 318, 318), Style::fill(p.alert))?;
    Ok(c)
}

/// Filled rounded square.
pub fn stop() -> Result<Canvas> {
    let mut c = Canvas::new()?;
    c.rounded_rect(bbox(128, 128, 384, 384), w(76), Style::fill(PALETTE.alert))?;
    Ok(c)
}

/// Stage screen with an on-air light.
pub fn live_mode() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    c.rounded_rect(bbox(84, 138, 430, 346), w(50), Style::outline(p.ink, stroke(32)))?;
    c.ellipse(bbox(372, 172, 420, 220), Style::fill(p.warm))?;
    c.line(&[pt(158, 244), pt(356, 244)], p.mist, stroke(24), Joint::Miter)?;
    Ok(c)
}

/// Pole with a warm pennant.
pub fn flag() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    let s = stroke(24);
    c.line(&[pt(146, 88), pt(146, 420)], p.ink, s, Joint::Miter)?;
    c.polygon(&[pt(158, 110), pt(376, 154), pt(158, 210)], Style::fill(p.warm))?;
    c.line(&[pt(146, 420), pt(222, 420)], p.ink, s, Joint::Miter)?;
    Ok(c)
}

/// Circled "i".
pub fn about() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    c.ellipse(bbox(110, 110, 402, 402), Style::outline(p.ink, stroke(28)))?;
    c.ellipse(bbox(244, 168, 268, 192), Style::fill(p.accent))?;
    c.line(&[pt(256, 216), pt(256, 330)], p.ink, stroke(26), Joint::Miter)?;
    Ok(c)
}
