//! Voice and people glyphs.

use crate::error::Result;
use crate::render::{bbox, pt, stroke, w, Canvas, Joint, Style};
use crate::types::PALETTE;

/// Which silhouette [`figure`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    Male,
    Female,
}

/// Microphone-shaped singer with a warm melody squiggle.
pub fn singing() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    let s = stroke(42);
    c.ellipse(bbox(180, 90, 332, 250), Style::outline(p.ink, s))?;
    c.arc(bbox(180, 154, 332, 316), 20.0, 160.0, p.ink, s)?;
    c.line(&[pt(256, 250), pt(256, 372)], p.ink, s, Joint::Miter)?;
    c.arc(bbox(174, 356, 338, 432), 200.0, 340.0, p.ink, s)?;
    c.line(
        &[pt(384, 180), pt(422, 164), pt(462, 180), pt(500, 164)],
        p.warm,
        stroke(24),
        Joint::Round,
    )?;
    Ok(c)
}

/// Lighter microphone with a breathing wave.
pub fn mindfulness_voice() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    let s = stroke(34);
    c.ellipse(bbox(182, 92, 330, 248), Style::outline(p.ink, s))?;
    c.arc(bbox(182, 154, 330, 308), 20.0, 160.0, p.ink, s)?;
    c.line(&[pt(256, 246), pt(256, 350)], p.ink, s, Joint::Miter)?;
    c.arc(bbox(174, 336, 338, 412), 200.0, 340.0, p.ink, s)?;
    c.line(
        &[pt(350, 250), pt(382, 214), pt(414, 266), pt(452, 228), pt(490, 246)],
        p.warm,
        stroke(24),
        Joint::Round,
    )?;
    Ok(c)
}

/// Globe with a speech bubble holding three warm dots.
pub fn language_accent() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    let s = stroke(26);
    c.ellipse(bbox(90, 84, 358, 352), Style::outline(p.ink, s))?;
    c.arc(bbox(120, 84, 328, 352), 90.0, 270.0, p.mist, stroke(20))?;
    c.arc(bbox(140, 84, 308, 352), 90.0, 270.0, p.mist, stroke(16))?;
    c.line(&[pt(90, 218), pt(358, 218)], p.mist, stroke(20), Joint::Miter)?;
    c.rounded_rect(bbox(292, 148, 456, 274), w(46), Style::outline(p.ink, s))?;
    c.polygon(&[pt(330, 274), pt(300, 308), pt(334, 292)], Style::fill(p.ink))?;
    for x in [338, 374, 410] {
        c.ellipse(bbox(x, 198, x + 20, 218), Style::fill(p.warm))?;
    }
    Ok(c)
}

/// Head and shoulders.
pub fn profile() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    let s = stroke(34);
    c.ellipse(bbox(186, 82, 326, 222), Style::outline(p.ink, s))?;
    c.rounded_rect(bbox(104, 236, 408, 412), w(90), Style::outline(p.ink, s))?;
    Ok(c)
}

/// Head and shoulders with an accent hair element chosen by `figure`.
///
/// Only the accent element differs between variants.
pub fn figure(figure: Figure) -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    let s = stroke(24);
    c.ellipse(bbox(180, 96, 332, 248), Style::outline(p.ink, s))?;
    match figure {
        Figure::Female => {
            c.arc(bbox(158, 90, 354, 286), 205.0, 335.0, p.accent, stroke(30))?;
        }
        Figure::Male => {
            c.rounded_rect(bbox(176, 90, 336, 156), w(26), Style::fill(p.accent))?;
        }
    }
    c.rounded_rect(bbox(108, 252, 404, 418), w(90), Style::outline(p.ink, s))?;
    Ok(c)
}
