//! Shape model: the geometry the clamps read and the fields they may write.
//!
//! A [`Shape`] mirrors one object of the host canvas engine. Its raw fields
//! (`left`, `top`, `scale_x`, `scale_y`) are what corrections mutate; its
//! cached bounding rectangle is what corrections are decided on. The cache is
//! only refreshed by [`Shape::set_coords`], matching how the host engine
//! recomputes coordinates on demand rather than on every field write.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Point, Rect};

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// An interactively manipulable object on the surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Left edge of the untransformed, scaled box.
    pub left: f64,
    /// Top edge of the untransformed, scaled box.
    pub top: f64,
    /// Intrinsic width before scaling.
    pub width: f64,
    /// Intrinsic height before scaling.
    pub height: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Clockwise rotation in degrees around the centre of the scaled box.
    pub angle: f64,
    #[serde(skip)]
    coords: Option<Rect>,
}

impl Shape {
    /// Create an unscaled, unrotated shape with coordinates already computed.
    #[must_use]
    pub fn new(id: ShapeId, left: f64, top: f64, width: f64, height: f64) -> Self {
        let mut shape = Self {
            id,
            left,
            top,
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
            coords: None,
        };
        shape.set_coords();
        shape
    }

    /// Rendered width before rotation.
    #[must_use]
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    /// Rendered height before rotation.
    #[must_use]
    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// The four corners of the rendered shape, clockwise from top-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let w = self.scaled_width();
        let h = self.scaled_height();
        let center = Point::new(self.left + w * 0.5, self.top + h * 0.5);
        [
            Point::new(self.left, self.top),
            Point::new(self.left + w, self.top),
            Point::new(self.left + w, self.top + h),
            Point::new(self.left, self.top + h),
        ]
        .map(|p| p.rotate_around(center, self.angle))
    }

    /// Recompute the cached bounding rectangle from the current fields.
    ///
    /// Non-finite geometry clears the cache.
    pub fn set_coords(&mut self) {
        self.coords = Rect::from_points(&self.corners()).filter(Rect::is_finite);
    }

    /// The axis-aligned box enclosing the rendered shape, as of the last
    /// [`Shape::set_coords`]. `None` when coordinates are unavailable.
    #[must_use]
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.coords
    }

    /// Apply a sparse update and refresh coordinates.
    pub fn apply_patch(&mut self, patch: &ShapePatch) {
        if let Some(left) = patch.left {
            self.left = left;
        }
        if let Some(top) = patch.top {
            self.top = top;
        }
        if let Some(sx) = patch.scale_x {
            self.scale_x = sx;
        }
        if let Some(sy) = patch.scale_y {
            self.scale_y = sy;
        }
        self.set_coords();
    }
}

/// Sparse update for the mutable fields of a shape. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapePatch {
    /// New left position, if corrected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// New top position, if corrected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    /// New horizontal scale, if corrected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    /// New vertical scale, if corrected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
}

impl ShapePatch {
    /// Record every mutable field of `after` that differs from `before`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn diff(before: &Shape, after: &Shape) -> Self {
        let changed = |a: f64, b: f64| (a != b).then_some(b);
        Self {
            left: changed(before.left, after.left),
            top: changed(before.top, after.top),
            scale_x: changed(before.scale_x, after.scale_x),
            scale_y: changed(before.scale_y, after.scale_y),
        }
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none() && self.scale_x.is_none() && self.scale_y.is_none()
    }
}
