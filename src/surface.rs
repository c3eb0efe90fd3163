//! Drawing surface: current dimensions and the shapes placed on it.
//!
//! The host canvas engine is the source of truth; it inserts and removes
//! shapes here as they are created and destroyed. The clamps never create or
//! delete shapes, they only mutate the ones they are handed.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::HashMap;

use crate::geometry::Size;
use crate::shape::{Shape, ShapeId};

/// Errors raised when constructing or resizing a surface.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SurfaceError {
    #[error("invalid surface dimensions {width}x{height} (must be finite and non-negative)")]
    InvalidDimensions { width: f64, height: f64 },
}

/// The bounded drawing area hosting shapes.
#[derive(Debug, Clone)]
pub struct Surface {
    size: Size,
    shapes: HashMap<ShapeId, Shape>,
}

impl Surface {
    /// Create an empty surface.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidDimensions`] if either dimension is
    /// negative or not finite.
    pub fn new(width: f64, height: f64) -> Result<Self, SurfaceError> {
        Ok(Self { size: validate(width, height)?, shapes: HashMap::new() })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replace the surface dimensions, returning the previous size.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidDimensions`] and leaves the size
    /// untouched if either dimension is negative or not finite.
    pub fn set_dimensions(&mut self, width: f64, height: f64) -> Result<Size, SurfaceError> {
        let next = validate(width, height)?;
        Ok(std::mem::replace(&mut self.size, next))
    }

    /// Insert or replace a shape, refreshing its coordinates.
    pub fn insert(&mut self, mut shape: Shape) {
        shape.set_coords();
        self.shapes.insert(shape.id, shape);
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.shapes.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id)
    }

    /// All shapes, ordered by id so iteration is deterministic.
    #[must_use]
    pub fn shapes(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.values().collect();
        shapes.sort_by_key(|s| s.id);
        shapes
    }

    /// Mutable access to every shape, in no particular order.
    pub fn shapes_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.values_mut()
    }

    /// Number of shapes on the surface.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the surface holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn validate(width: f64, height: f64) -> Result<Size, SurfaceError> {
    if width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0 {
        Ok(Size::new(width, height))
    } else {
        Err(SurfaceError::InvalidDimensions { width, height })
    }
}
