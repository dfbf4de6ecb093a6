//! Tempo, beat and feedback glyphs, including the parametric families.

use crate::error::{IconsetError, Result};
use crate::render::{bbox, pt, stroke, w, Canvas, Joint, Style};
use crate::types::PALETTE;

/// Which end of the feedback bar chart is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Low,
    High,
}

const BAR_LEFT: i32 = 112;
const BAR_WIDTH: i32 = 54;
const BAR_GAP: i32 = 34;
const BAR_BASE: i32 = 390;

const BEAT_SPACING: f64 = 70.0;
const BEAT_RADIUS: f64 = 22.0;
const BEAT_ROW: f64 = 242.0;

/// Pendulum metronome.
pub fn metronome() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    c.polygon(
        &[pt(256, 92), pt(128, 412), pt(384, 412)],
        Style::outline(p.ink, stroke(26)),
    )?;
    c.line(&[pt(256, 180), pt(338, 308)], p.warm, stroke(24), Joint::Miter)?;
    c.ellipse(bbox(324, 292, 362, 330), Style::fill(p.warm))?;
    Ok(c)
}

/// Smaller metronome over a pulse line.
pub fn bpm() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    c.polygon(
        &[pt(256, 92), pt(144, 354), pt(368, 354)],
        Style::outline(p.ink, stroke(24)),
    )?;
    c.line(&[pt(256, 184), pt(316, 276)], p.warm, stroke(20), Joint::Miter)?;
    c.ellipse(bbox(300, 260, 332, 292), Style::fill(p.warm))?;
    c.line(
        &[
            pt(92, 418),
            pt(184, 418),
            pt(214, 392),
            pt(242, 436),
            pt(272, 406),
            pt(420, 406),
        ],
        p.accent,
        stroke(16),
        Joint::Round,
    )?;
    Ok(c)
}

/// Open dial with four beat markers, the last one warm.
pub fn count_in() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    c.arc(bbox(82, 82, 430, 430), 300.0, 580.0, p.ink, stroke(20))?;
    let markers = [170, 230, 290, 350];
    for (i, x) in markers.into_iter().enumerate() {
        let colour = if i == markers.len() - 1 { p.warm } else { p.mist };
        c.ellipse(bbox(x, 244, x + 30, 274), Style::fill(colour))?;
    }
    c.line(&[pt(256, 112), pt(256, 170)], p.warm, stroke(16), Joint::Miter)?;
    Ok(c)
}

/// Logical x centres of a beat group, centred on the grid midline.
pub fn beat_centres(count: u32) -> impl Iterator<Item = f64> {
    let total = f64::from(count.saturating_sub(1)) * BEAT_SPACING;
    let start = 256.0 - total / 2.0;
    (0..count).map(move |i| start + f64::from(i) * BEAT_SPACING)
}

/// A row of `count` beat markers over a baseline; the last marker is warm.
pub fn beats(count: u32) -> Result<Canvas> {
    if count == 0 {
        return Err(IconsetError::Geometry {
            message: "beat group needs at least one marker".to_string(),
            help: None,
        });
    }

    let p = &PALETTE;
    let mut c = Canvas::new()?;
    for (i, x) in beat_centres(count).enumerate() {
        let colour = if i as u32 == count - 1 { p.warm } else { p.mist };
        let marker = bbox(
            x - BEAT_RADIUS,
            BEAT_ROW - BEAT_RADIUS,
            x + BEAT_RADIUS,
            BEAT_ROW + BEAT_RADIUS,
        );
        c.ellipse(marker, Style::fill(colour))?;
    }
    c.line(&[pt(130, 320), pt(382, 320)], p.ink, stroke(18), Joint::Miter)?;
    Ok(c)
}

/// Four rounded bars; the tallest one carries the warm accent.
///
/// `High` rises left to right, `Low` falls.
pub fn feedback(intensity: Intensity) -> Result<Canvas> {
    let p = &PALETTE;
    let (heights, accent) = match intensity {
        Intensity::High => ([120, 170, 230, 280], 3),
        Intensity::Low => ([260, 210, 160, 110], 0),
    };

    let mut c = Canvas::new()?;
    for (i, h) in heights.into_iter().enumerate() {
        let colour = if i == accent { p.warm } else { p.mist };
        let x = BAR_LEFT + i as i32 * (BAR_WIDTH + BAR_GAP);
        c.rounded_rect(
            bbox(x, BAR_BASE - h, x + BAR_WIDTH, BAR_BASE),
            w(16),
            Style::fill(colour),
        )?;
    }
    Ok(c)
}

/// Pulse inside a ring with two floating dots.
pub fn ease_pocket() -> Result<Canvas> {
    let p = &PALETTE;
    let mut c = Canvas::new()?;
    c.ellipse(bbox(92, 86, 420, 414), Style::outline(p.mist, stroke(20)))?;
    c.line(
        &[
            pt(124, 256),
            pt(188, 256),
            pt(236, 210),
            pt(280, 302),
            pt(336, 236),
            pt(390, 236),
        ],
        p.accent,
        stroke(20),
        Joint::Round,
    )?;
    c.ellipse(bbox(356, 146, 392, 182), Style::fill(p.warm))?;
    c.ellipse(bbox(140, 318, 170, 348), Style::fill(p.haze))?;
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CANVAS;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    /// Horizontal runs of non-transparent pixels on a canvas row:
    /// `(centre x, colour at centre)` in canvas units.
    fn runs(canvas: &Canvas, y: u32) -> Vec<(u32, Colour)> {
        let mut runs = Vec::new();
        let mut start = None;
        for x in 0..=CANVAS {
            let filled = x < CANVAS && !canvas.pixel(x, y).is_transparent();
            match (filled, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    let mid = (s + x - 1) / 2;
                    runs.push((mid, canvas.pixel(mid, y)));
                    start = None;
                }
                _ => {}
            }
        }
        runs
    }

    fn assert_beat_group(count: u32) {
        let canvas = beats(count).unwrap();
        let row = runs(&canvas, w(BEAT_ROW) as u32);
        assert_eq!(row.len(), count as usize);

        // Evenly spaced.
        let step = w(BEAT_SPACING) as i64;
        for pair in row.windows(2) {
            let gap = pair[1].0 as i64 - pair[0].0 as i64;
            assert!((gap - step).abs() <= 2, "gap {gap}");
        }

        // Centred on the midline.
        let mean = row.iter().map(|&(x, _)| x as i64).sum::<i64>() / count as i64;
        assert!((mean - w(256) as i64).abs() <= 2, "mean {mean}");

        // Accent on the last marker only.
        let colours: Vec<Colour> = row.iter().map(|&(_, c)| c).collect();
        let mut expected = vec![PALETTE.mist; count as usize - 1];
        expected.push(PALETTE.warm);
        assert_eq!(colours, expected);
    }

    #[test]
    fn test_two_beats() {
        assert_beat_group(2);
    }

    #[test]
    fn test_four_beats() {
        assert_beat_group(4);
    }

    #[test]
    fn test_single_beat_is_centred_and_warm() {
        assert_beat_group(1);
    }

    #[test]
    fn test_beat_centres() {
        let two: Vec<f64> = beat_centres(2).collect();
        assert_eq!(two, vec![221.0, 291.0]);
        let four: Vec<f64> = beat_centres(4).collect();
        assert_eq!(four, vec![151.0, 221.0, 291.0, 361.0]);
    }

    #[test]
    fn test_beats_rejects_empty_and_oversized_groups() {
        assert!(matches!(beats(0), Err(IconsetError::Geometry { .. })));
        // Eight markers no longer fit on the grid.
        assert!(matches!(beats(8), Err(IconsetError::Geometry { .. })));
        assert!(beats(7).is_ok());
    }

    /// `(top y, colour near the base)` for each feedback bar.
    fn bars(canvas: &Canvas) -> Vec<(u32, Colour)> {
        (0..4)
            .map(|i| {
                let x = w(BAR_LEFT + i * (BAR_WIDTH + BAR_GAP) + BAR_WIDTH / 2) as u32;
                let top = (0..CANVAS)
                    .find(|&y| !canvas.pixel(x, y).is_transparent())
                    .unwrap();
                (top, canvas.pixel(x, w(BAR_BASE - 10) as u32))
            })
            .collect()
    }

    fn accent_and_tallest(intensity: Intensity) -> (usize, usize) {
        let bars = bars(&feedback(intensity).unwrap());
        let accented: Vec<usize> = (0..4).filter(|&i| bars[i].1 == PALETTE.warm).collect();
        assert_eq!(accented.len(), 1);
        assert!(bars
            .iter()
            .enumerate()
            .all(|(i, b)| i == accented[0] || b.1 == PALETTE.mist));
        let tallest = (0..4).min_by_key(|&i| bars[i].0).unwrap();
        (accented[0], tallest)
    }

    #[test]
    fn test_feedback_high_accents_last_bar() {
        assert_eq!(accent_and_tallest(Intensity::High), (3, 3));
    }

    #[test]
    fn test_feedback_low_accents_first_bar() {
        assert_eq!(accent_and_tallest(Intensity::Low), (0, 0));
    }

    #[test]
    fn test_count_in_last_marker_is_warm() {
        let canvas = count_in().unwrap();
        let row = runs(&canvas, w(259) as u32);
        let colours: Vec<Colour> = row.iter().map(|&(_, c)| c).collect();
        // Dial ring on both sides, four markers between.
        assert_eq!(colours.len(), 6);
        assert_eq!(
            colours[1..5].to_vec(),
            vec![PALETTE.mist, PALETTE.mist, PALETTE.mist, PALETTE.warm]
        );
    }

    #[test]
    fn test_ease_pocket_haze_is_translucent() {
        let canvas = ease_pocket().unwrap();
        let haze = canvas.pixel(w(155) as u32, w(333) as u32);
        assert_eq!(haze.a, PALETTE.haze.a);
    }
}
