#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this point clockwise by `degrees` around `pivot`.
    ///
    /// Surface coordinates grow downward, so a positive angle turns +x toward +y.
    #[must_use]
    pub fn rotate_around(self, pivot: Point, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self {
            x: pivot.x + dx * cos - dy * sin,
            y: pivot.y + dx * sin + dy * cos,
        }
    }
}

/// Width and height of the drawing surface, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `rect` is no wider than this size.
    #[must_use]
    pub fn fits_width(&self, rect: &Rect) -> bool {
        rect.width <= self.width
    }

    /// Whether `rect` is no taller than this size.
    #[must_use]
    pub fn fits_height(&self, rect: &Rect) -> bool {
        rect.height <= self.height
    }

    /// Whether either dimension is strictly smaller than in `previous`.
    #[must_use]
    pub fn shrank_from(&self, previous: Size) -> bool {
        self.width < previous.width || self.height < previous.height
    }
}

/// Axis-aligned rectangle. `left`/`top` is the minimum corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Smallest axis-aligned rectangle enclosing every point.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self { left: min_x, top: min_y, width: max_x - min_x, height: max_y - min_y })
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether every component is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Whether this rectangle lies entirely within `[0, size.width] x [0, size.height]`.
    #[must_use]
    pub fn is_within(&self, size: Size) -> bool {
        self.left >= 0.0 && self.top >= 0.0 && self.right() <= size.width && self.bottom() <= size.height
    }
}
