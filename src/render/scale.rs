//! Logical design grid to canvas coordinate scaling.
//!
//! Icons are authored on a fixed 512-unit grid and rendered on a canvas
//! `SUPERSAMPLE` times larger. Every coordinate and stroke width goes through
//! [`w`] so builders never see the supersample factor.

/// Side of the logical design grid, and of every persisted icon.
pub const LOGICAL_SIZE: u32 = 512;

/// Supersampling factor between the design grid and the canvas.
pub const SUPERSAMPLE: u32 = 4;

/// Side of the supersampled canvas.
pub const CANVAS: u32 = LOGICAL_SIZE * SUPERSAMPLE;

/// A point in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding box in canvas units, `(x0, y0)` top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// Edges as `(left, top, right, bottom)` pulled in by `by` on every side.
    pub(crate) fn inset(&self, by: f32) -> (f32, f32, f32, f32) {
        (
            self.x0 as f32 + by,
            self.y0 as f32 + by,
            self.x1 as f32 - by,
            self.y1 as f32 - by,
        )
    }
}

/// Scale a logical coordinate or length to canvas units.
pub fn w(value: impl Into<f64>) -> i32 {
    (value.into() * f64::from(SUPERSAMPLE)).round() as i32
}

/// Scale a logical stroke width to canvas units.
pub fn stroke(base: impl Into<f64>) -> i32 {
    w(base)
}

/// A logical point in canvas units.
pub fn pt(x: impl Into<f64>, y: impl Into<f64>) -> Point {
    Point::new(w(x), w(y))
}

/// A logical bounding box in canvas units.
pub fn bbox(
    x0: impl Into<f64>,
    y0: impl Into<f64>,
    x1: impl Into<f64>,
    y1: impl Into<f64>,
) -> BBox {
    BBox::new(w(x0), w(y0), w(x1), w(y1))
}
