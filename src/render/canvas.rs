//! Supersampled drawing surface.
//!
//! A [`Canvas`] is a transparent `CANVAS`×`CANVAS` RGBA raster with the
//! primitive set icon builders draw with. Arguments are canvas units, i.e.
//! already passed through [`super::scale::w`].
//!
//! Primitives are rasterized without antialiasing. Smooth edges come from
//! downsampling the canvas (see [`super::png::downsample`]), which keeps the
//! raster a pure function of the drawing calls.

use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::error::{IconsetError, Result};
use crate::types::Colour;

use super::glyph::{self, GlyphStroke};
use super::scale::{BBox, Point, CANVAS};

/// Cubic Bézier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Solid fill.
    Fill(Colour),
    /// Stroke of `width` canvas units, kept inside the shape's bounds.
    Outline { colour: Colour, width: i32 },
}

impl Style {
    pub fn fill(colour: Colour) -> Self {
        Style::Fill(colour)
    }

    pub fn outline(colour: Colour, width: i32) -> Self {
        Style::Outline { colour, width }
    }
}

/// Corner treatment where polyline segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Joint {
    #[default]
    Miter,
    Round,
}

impl From<Joint> for LineJoin {
    fn from(joint: Joint) -> Self {
        match joint {
            Joint::Miter => LineJoin::Miter,
            Joint::Round => LineJoin::Round,
        }
    }
}

/// A transparent supersampled RGBA surface.
#[derive(Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

impl Canvas {
    /// Allocate a fully transparent canvas.
    pub fn new() -> Result<Self> {
        let pixmap = Pixmap::new(CANVAS, CANVAS).ok_or_else(|| IconsetError::Build {
            message: format!("Failed to allocate {CANVAS}x{CANVAS} canvas"),
            help: None,
        })?;
        Ok(Self { pixmap })
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Raw premultiplied RGBA bytes, row-major.
    pub fn as_premultiplied(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha colour at a pixel; transparent outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        self.pixmap
            .pixel(x, y)
            .map(|p| {
                let c = p.demultiply();
                Colour::new(c.red(), c.green(), c.blue(), c.alpha())
            })
            .unwrap_or(Colour::TRANSPARENT)
    }

    /// Ellipse inscribed in `bbox`.
    pub fn ellipse(&mut self, bbox: BBox, style: Style) -> Result<()> {
        check_bbox(bbox)?;
        match style {
            Style::Fill(colour) => {
                let path = oval(bbox.inset(0.0))?;
                self.fill(&path, colour);
            }
            Style::Outline { colour, width } => {
                check_width(width)?;
                let path = oval(bbox.inset(width as f32 / 2.0))?;
                self.stroke(&path, colour, width as f32, LineJoin::Round, LineCap::Butt);
            }
        }
        Ok(())
    }

    /// Arc of the ellipse inscribed in `bbox`, from `start` to `end` degrees
    /// clockwise from 3 o'clock. `end` below `start` wraps past 360.
    pub fn arc(&mut self, bbox: BBox, start: f32, end: f32, colour: Colour, width: i32) -> Result<()> {
        check_bbox(bbox)?;
        check_width(width)?;
        let (l, t, r, b) = bbox.inset(width as f32 / 2.0);
        if r <= l || b <= t {
            return Err(degenerate(&format!("arc stroke {width} is wider than its box")));
        }

        let (start, end) = sweep(start, end)?;
        if end == start {
            return Ok(());
        }

        let mut pb = PathBuilder::new();
        push_arc(
            &mut pb,
            ((l + r) / 2.0, (t + b) / 2.0),
            ((r - l) / 2.0, (b - t) / 2.0),
            start,
            end,
        );
        let path = pb.finish().ok_or_else(|| degenerate("arc"))?;
        self.stroke(&path, colour, width as f32, LineJoin::Round, LineCap::Butt);
        Ok(())
    }

    /// Open polyline through `points`.
    pub fn line(&mut self, points: &[Point], colour: Colour, width: i32, joint: Joint) -> Result<()> {
        if points.len() < 2 {
            return Err(IconsetError::Geometry {
                message: format!("line needs at least 2 points, got {}", points.len()),
                help: None,
            });
        }
        check_width(width)?;
        let path = polyline(points, (width + 1) / 2, false)?;
        self.stroke(&path, colour, width as f32, joint.into(), LineCap::Butt);
        Ok(())
    }

    /// Closed polygon through `points`.
    pub fn polygon(&mut self, points: &[Point], style: Style) -> Result<()> {
        if points.len() < 3 {
            return Err(IconsetError::Geometry {
                message: format!("polygon needs at least 3 points, got {}", points.len()),
                help: None,
            });
        }
        match style {
            Style::Fill(colour) => {
                let path = polyline(points, 0, true)?;
                self.fill(&path, colour);
            }
            Style::Outline { colour, width } => {
                check_width(width)?;
                let path = polyline(points, (width + 1) / 2, true)?;
                self.stroke(&path, colour, width as f32, LineJoin::Miter, LineCap::Butt);
            }
        }
        Ok(())
    }

    /// Rectangle with circular corners of `radius`, clamped to half the
    /// shorter side.
    pub fn rounded_rect(&mut self, bbox: BBox, radius: i32, style: Style) -> Result<()> {
        check_bbox(bbox)?;
        if radius < 0 {
            return Err(IconsetError::Geometry {
                message: format!("negative corner radius {radius}"),
                help: None,
            });
        }
        match style {
            Style::Fill(colour) => {
                let path = rounded_rect(bbox.inset(0.0), radius as f32)?;
                self.fill(&path, colour);
            }
            Style::Outline { colour, width } => {
                check_width(width)?;
                let half = width as f32 / 2.0;
                let path = rounded_rect(bbox.inset(half), (radius as f32 - half).max(0.0))?;
                self.stroke(&path, colour, width as f32, LineJoin::Miter, LineCap::Butt);
            }
        }
        Ok(())
    }

    /// Draw `text` from the built-in stroke font with its cell's top-left
    /// corner at `origin`.
    pub fn text(&mut self, origin: Point, text: &str, colour: Colour, size: i32) -> Result<()> {
        check_width(size)?;
        let em = size as f32;
        let advance = glyph::ADVANCE * em;
        let cells = text.chars().count() as f32;
        check_bbox(BBox::new(
            origin.x,
            origin.y,
            origin.x + (advance * cells).ceil() as i32,
            origin.y + size,
        ))?;

        let glyphs = text
            .chars()
            .map(|ch| {
                glyph::strokes(ch).ok_or_else(|| IconsetError::Geometry {
                    message: format!("no built-in glyph for {ch:?}"),
                    help: Some("Supported glyphs: '?', '!'".to_string()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for (i, strokes) in glyphs.into_iter().enumerate() {
            let ox = origin.x as f32 + advance * i as f32;
            let oy = origin.y as f32;
            let at = |x: f32, y: f32| (ox + x * em, oy + y * em);

            for stroke in strokes {
                match *stroke {
                    GlyphStroke::Arc { cx, cy, r, start, end } => {
                        let mut pb = PathBuilder::new();
                        push_arc(&mut pb, at(cx, cy), (r * em, r * em), start, end);
                        let path = pb.finish().ok_or_else(|| degenerate("glyph arc"))?;
                        self.stroke(&path, colour, glyph::WEIGHT * em, LineJoin::Round, LineCap::Round);
                    }
                    GlyphStroke::Polyline(points) => {
                        let mut pb = PathBuilder::new();
                        for (j, &(x, y)) in points.iter().enumerate() {
                            let (px, py) = at(x, y);
                            if j == 0 {
                                pb.move_to(px, py);
                            } else {
                                pb.line_to(px, py);
                            }
                        }
                        let path = pb.finish().ok_or_else(|| degenerate("glyph stroke"))?;
                        self.stroke(&path, colour, glyph::WEIGHT * em, LineJoin::Round, LineCap::Round);
                    }
                    GlyphStroke::Dot { cx, cy, r } => {
                        let (px, py) = at(cx, cy);
                        let path = PathBuilder::from_circle(px, py, r * em)
                            .ok_or_else(|| degenerate("glyph dot"))?;
                        self.fill(&path, colour);
                    }
                }
            }
        }
        Ok(())
    }

    fn fill(&mut self, path: &Path, colour: Colour) {
        let paint = paint(colour);
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke(&mut self, path: &Path, colour: Colour, width: f32, join: LineJoin, cap: LineCap) {
        let paint = paint(colour);
        let stroke = Stroke {
            width,
            line_join: join,
            line_cap: cap,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }
}

fn paint(colour: Colour) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(colour.r, colour.g, colour.b, colour.a);
    paint.anti_alias = false;
    paint
}

fn in_canvas(v: i32) -> bool {
    (0..=CANVAS as i32).contains(&v)
}

fn check_bbox(bbox: BBox) -> Result<()> {
    let inside = in_canvas(bbox.x0) && in_canvas(bbox.y0) && in_canvas(bbox.x1) && in_canvas(bbox.y1);
    if !inside {
        return Err(IconsetError::Geometry {
            message: format!(
                "box ({}, {}, {}, {}) leaves the {CANVAS}x{CANVAS} canvas",
                bbox.x0, bbox.y0, bbox.x1, bbox.y1
            ),
            help: Some("Logical coordinates must stay within 0..=512".to_string()),
        });
    }
    if bbox.x1 < bbox.x0 || bbox.y1 < bbox.y0 {
        return Err(IconsetError::Geometry {
            message: format!(
                "box ({}, {}, {}, {}) is inverted",
                bbox.x0, bbox.y0, bbox.x1, bbox.y1
            ),
            help: None,
        });
    }
    Ok(())
}

/// Check a point, with a stroke reaching `margin` units around it, lies on
/// the canvas.
fn check_point(point: Point, margin: i32) -> Result<()> {
    let fits = |v: i32| in_canvas(v - margin) && in_canvas(v + margin);
    if fits(point.x) && fits(point.y) {
        Ok(())
    } else {
        Err(IconsetError::Geometry {
            message: format!(
                "point ({}, {}) with stroke reach {margin} leaves the {CANVAS}x{CANVAS} canvas",
                point.x, point.y
            ),
            help: Some("Logical coordinates must stay within 0..=512".to_string()),
        })
    }
}

fn check_width(width: i32) -> Result<()> {
    if width > 0 {
        Ok(())
    } else {
        Err(IconsetError::Geometry {
            message: format!("width must be positive, got {width}"),
            help: None,
        })
    }
}

fn degenerate(what: &str) -> IconsetError {
    IconsetError::Geometry {
        message: format!("degenerate geometry: {what}"),
        help: None,
    }
}

/// Normalized `(start, end)` of a clockwise sweep: `start` in `[0, 360)`,
/// sweep at most one full turn.
fn sweep(start: f32, end: f32) -> Result<(f32, f32)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(IconsetError::Geometry {
            message: format!("arc angles must be finite, got {start} -> {end}"),
            help: None,
        });
    }
    let span = if end >= start {
        (end - start).min(360.0)
    } else if start - end >= 360.0 {
        360.0
    } else {
        end + 360.0 - start
    };
    let start = start.rem_euclid(360.0);
    Ok((start, start + span))
}

fn oval((l, t, r, b): (f32, f32, f32, f32)) -> Result<Path> {
    Rect::from_ltrb(l, t, r, b)
        .and_then(PathBuilder::from_oval)
        .ok_or_else(|| degenerate("ellipse"))
}

fn polyline(points: &[Point], margin: i32, close: bool) -> Result<Path> {
    for &point in points {
        check_point(point, margin)?;
    }
    let mut pb = PathBuilder::new();
    for (i, &point) in points.iter().enumerate() {
        if i == 0 {
            pb.move_to(point.x as f32, point.y as f32);
        } else {
            pb.line_to(point.x as f32, point.y as f32);
        }
    }
    if close {
        pb.close();
    }
    pb.finish().ok_or_else(|| degenerate("polyline"))
}

fn rounded_rect((l, t, r, b): (f32, f32, f32, f32), radius: f32) -> Result<Path> {
    let rect = Rect::from_ltrb(l, t, r, b).ok_or_else(|| degenerate("rounded rectangle"))?;
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    if radius <= 0.0 {
        return Ok(PathBuilder::from_rect(rect));
    }

    let k = radius * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(l + radius, t);
    pb.line_to(r - radius, t);
    pb.cubic_to(r - radius + k, t, r, t + radius - k, r, t + radius);
    pb.line_to(r, b - radius);
    pb.cubic_to(r, b - radius + k, r - radius + k, b, r - radius, b);
    pb.line_to(l + radius, b);
    pb.cubic_to(l + radius - k, b, l, b - radius + k, l, b - radius);
    pb.line_to(l, t + radius);
    pb.cubic_to(l, t + radius - k, l + radius - k, t, l + radius, t);
    pb.close();
    pb.finish().ok_or_else(|| degenerate("rounded rectangle"))
}

/// Append an elliptical arc as cubic segments of at most 90 degrees.
fn push_arc(pb: &mut PathBuilder, (cx, cy): (f32, f32), (rx, ry): (f32, f32), start: f32, end: f32) {
    let sweep = end - start;
    let segments = (sweep.abs() / 90.0).ceil().max(1.0) as usize;
    let step = (sweep / segments as f32).to_radians();
    let at = |t: f32| (cx + rx * t.cos(), cy + ry * t.sin());
    let tangent = |t: f32| (-rx * t.sin(), ry * t.cos());

    let mut t0 = start.to_radians();
    let (x, y) = at(t0);
    pb.move_to(x, y);
    let k = 4.0 / 3.0 * (step / 4.0).tan();
    for _ in 0..segments {
        let t1 = t0 + step;
        let (x0, y0) = at(t0);
        let (x1, y1) = at(t1);
        let (dx0, dy0) = tangent(t0);
        let (dx1, dy1) = tangent(t1);
        pb.cubic_to(x0 + k * dx0, y0 + k * dy0, x1 - k * dx1, y1 - k * dy1, x1, y1);
        t0 = t1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::scale::{bbox, pt, stroke, w};

    const RED: Colour = Colour::rgb(255, 0, 0);
    const BLUE: Colour = Colour::rgb(0, 0, 255);

    fn at(canvas: &Canvas, x: i32, y: i32) -> Colour {
        canvas.pixel(w(x) as u32, w(y) as u32)
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new().unwrap();
        assert_eq!(canvas.size(), CANVAS);
        assert_eq!(canvas.as_premultiplied().len(), (CANVAS * CANVAS * 4) as usize);
        assert!(canvas.as_premultiplied().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_filled_ellipse() {
        let mut canvas = Canvas::new().unwrap();
        canvas.ellipse(bbox(100, 100, 300, 300), Style::fill(RED)).unwrap();

        assert_eq!(at(&canvas, 200, 200), RED);
        assert!(at(&canvas, 105, 105).is_transparent());
        assert!(at(&canvas, 350, 200).is_transparent());
    }

    #[test]
    fn test_outlined_ellipse_stays_inside_box() {
        let mut canvas = Canvas::new().unwrap();
        canvas
            .ellipse(bbox(100, 100, 300, 300), Style::outline(RED, stroke(20)))
            .unwrap();

        // Ring is 20 units thick, inside the box.
        assert_eq!(at(&canvas, 110, 200), RED);
        assert_eq!(at(&canvas, 200, 290), RED);
        assert!(at(&canvas, 200, 200).is_transparent());
        assert!(canvas.pixel(w(100) as u32 - 2, w(200) as u32).is_transparent());
    }

    #[test]
    fn test_arc_covers_only_its_sweep() {
        let mut canvas = Canvas::new().unwrap();
        // Lower half: 0 -> 180 degrees clockwise from 3 o'clock.
        canvas
            .arc(bbox(100, 100, 300, 300), 0.0, 180.0, RED, stroke(10))
            .unwrap();

        assert_eq!(at(&canvas, 200, 295), RED);
        assert!(at(&canvas, 200, 105).is_transparent());
    }

    #[test]
    fn test_arc_wraps_past_full_turn() {
        let mut canvas = Canvas::new().unwrap();
        // 300 -> 580 runs clockwise from upper right round to upper left,
        // leaving the gap at 12 o'clock.
        canvas
            .arc(bbox(100, 100, 300, 300), 300.0, 580.0, RED, stroke(10))
            .unwrap();

        assert_eq!(at(&canvas, 295, 200), RED);
        assert_eq!(at(&canvas, 200, 295), RED);
        assert_eq!(at(&canvas, 105, 200), RED);
        assert!(at(&canvas, 200, 105).is_transparent());
    }

    #[test]
    fn test_arc_with_huge_or_non_finite_angles() {
        let mut canvas = Canvas::new().unwrap();
        // A gap of a full turn or more draws the whole ellipse.
        canvas
            .arc(bbox(100, 100, 300, 300), 1.0e12, 0.0, RED, stroke(10))
            .unwrap();
        assert_eq!(at(&canvas, 200, 105), RED);
        assert_eq!(at(&canvas, 200, 295), RED);

        let err = canvas.arc(bbox(100, 100, 300, 300), f32::NAN, 90.0, RED, stroke(10));
        assert!(matches!(err, Err(IconsetError::Geometry { .. })));
        let err = canvas.arc(bbox(100, 100, 300, 300), 0.0, f32::INFINITY, RED, stroke(10));
        assert!(matches!(err, Err(IconsetError::Geometry { .. })));
    }

    #[test]
    fn test_sweep_normalization() {
        assert_eq!(sweep(0.0, 180.0).unwrap(), (0.0, 180.0));
        assert_eq!(sweep(300.0, 220.0).unwrap(), (300.0, 580.0));
        assert_eq!(sweep(0.0, 720.0).unwrap(), (0.0, 360.0));
        assert_eq!(sweep(720.0, 0.0).unwrap(), (0.0, 360.0));
        assert_eq!(sweep(-90.0, 0.0).unwrap(), (270.0, 360.0));
    }

    #[test]
    fn test_line_with_round_joint() {
        let mut canvas = Canvas::new().unwrap();
        canvas
            .line(&[pt(100, 100), pt(200, 100), pt(200, 200)], BLUE, stroke(10), Joint::Round)
            .unwrap();

        assert_eq!(at(&canvas, 150, 100), BLUE);
        assert_eq!(at(&canvas, 200, 150), BLUE);
        assert!(at(&canvas, 150, 150).is_transparent());
    }

    #[test]
    fn test_line_needs_two_points() {
        let mut canvas = Canvas::new().unwrap();
        let err = canvas.line(&[pt(1, 1)], BLUE, stroke(10), Joint::Miter);
        assert!(matches!(err, Err(IconsetError::Geometry { .. })));
    }

    #[test]
    fn test_polygon_fill_and_outline() {
        let mut canvas = Canvas::new().unwrap();
        let triangle = [pt(256, 92), pt(128, 412), pt(384, 412)];
        canvas.polygon(&triangle, Style::fill(RED)).unwrap();
        assert_eq!(at(&canvas, 256, 300), RED);

        let mut outlined = Canvas::new().unwrap();
        outlined.polygon(&triangle, Style::outline(RED, stroke(20))).unwrap();
        assert!(at(&outlined, 256, 300).is_transparent());
        assert_eq!(at(&outlined, 256, 412), RED);
    }

    #[test]
    fn test_rounded_rect_cuts_corners() {
        let mut canvas = Canvas::new().unwrap();
        canvas
            .rounded_rect(bbox(128, 128, 384, 384), w(76), Style::fill(RED))
            .unwrap();

        assert_eq!(at(&canvas, 256, 256), RED);
        assert_eq!(at(&canvas, 256, 130), RED);
        assert!(at(&canvas, 130, 130).is_transparent());
    }

    #[test]
    fn test_rounded_rect_outline_is_hollow() {
        let mut canvas = Canvas::new().unwrap();
        canvas
            .rounded_rect(bbox(100, 100, 400, 300), w(20), Style::outline(RED, stroke(20)))
            .unwrap();

        assert_eq!(at(&canvas, 250, 110), RED);
        assert!(at(&canvas, 250, 200).is_transparent());
    }

    #[test]
    fn test_out_of_bounds_fails_fast() {
        let mut canvas = Canvas::new().unwrap();
        let err = canvas.ellipse(bbox(-10, 0, 100, 100), Style::fill(RED));
        assert!(matches!(err, Err(IconsetError::Geometry { .. })));

        let err = canvas.line(&[pt(0, 0), pt(513, 10)], RED, stroke(4), Joint::Miter);
        assert!(matches!(err, Err(IconsetError::Geometry { .. })));

        // Nothing was drawn by the failed calls.
        assert!(canvas.as_premultiplied().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_stroke_reach_must_stay_on_canvas() {
        let mut canvas = Canvas::new().unwrap();
        // Centreline on the edge, half the stroke off the canvas.
        let err = canvas.line(&[pt(0, 0), pt(512, 0)], RED, stroke(40), Joint::Miter);
        assert!(matches!(err, Err(IconsetError::Geometry { .. })));
        let err = canvas.polygon(
            &[pt(0, 100), pt(200, 100), pt(100, 200)],
            Style::outline(RED, stroke(10)),
        );
        assert!(matches!(err, Err(IconsetError::Geometry { .. })));
        assert!(canvas.as_premultiplied().iter().all(|&b| b == 0));

        // Fills and strokes that just fit are accepted.
        canvas.polygon(&[pt(0, 100), pt(200, 100), pt(100, 200)], Style::fill(RED)).unwrap();
        canvas.line(&[pt(20, 20), pt(492, 20)], RED, stroke(40), Joint::Miter).unwrap();
    }

    #[test]
    fn test_inverted_box_and_bad_widths_rejected() {
        let mut canvas = Canvas::new().unwrap();
        assert!(canvas.ellipse(bbox(300, 300, 100, 100), Style::fill(RED)).is_err());
        assert!(canvas.ellipse(bbox(0, 0, 100, 100), Style::outline(RED, 0)).is_err());
        assert!(canvas.arc(bbox(0, 0, 10, 10), 0.0, 90.0, RED, stroke(20)).is_err());
        assert!(canvas.rounded_rect(bbox(0, 0, 10, 10), -1, Style::fill(RED)).is_err());
    }

    #[test]
    fn test_text_draws_known_glyph_inside_cell() {
        let mut canvas = Canvas::new().unwrap();
        canvas.text(pt(100, 100), "?", BLUE, w(100)).unwrap();

        // Dot of the question mark.
        assert_eq!(at(&canvas, 130, 186), BLUE);
        let cell = (w(100)..w(160), w(100)..w(200));
        for y in (0..CANVAS).step_by(7) {
            for x in (0..CANVAS).step_by(7) {
                if !canvas.pixel(x, y).is_transparent() {
                    assert!(cell.0.contains(&(x as i32)) && cell.1.contains(&(y as i32)));
                }
            }
        }
    }

    #[test]
    fn test_text_rejects_unknown_glyph() {
        let mut canvas = Canvas::new().unwrap();
        let err = canvas.text(pt(10, 10), "A", BLUE, w(40));
        assert!(matches!(err, Err(IconsetError::Geometry { .. })));
    }

    #[test]
    fn test_text_with_unknown_glyph_draws_nothing() {
        let mut canvas = Canvas::new().unwrap();
        assert!(canvas.text(pt(10, 10), "?A", BLUE, w(40)).is_err());
        assert!(canvas.as_premultiplied().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_text_cell_must_fit() {
        let mut canvas = Canvas::new().unwrap();
        assert!(canvas.text(pt(480, 10), "?", BLUE, w(82)).is_err());
    }

    #[test]
    fn test_primitives_are_not_antialiased() {
        let mut canvas = Canvas::new().unwrap();
        canvas.ellipse(bbox(50, 50, 450, 450), Style::outline(RED, stroke(30))).unwrap();
        canvas.line(&[pt(60, 400), pt(400, 70)], BLUE, stroke(12), Joint::Miter).unwrap();

        assert!(canvas
            .as_premultiplied()
            .chunks_exact(4)
            .all(|p| p[3] == 0 || p[3] == 255));
    }
}
