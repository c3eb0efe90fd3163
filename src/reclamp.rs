//! Resize reclamp: re-fits shapes after the surface itself changes size.
//!
//! Growth never invalidates a shape, so only a shrink on either axis triggers
//! a pass. Each shape whose bounding rectangle now crosses the new right or
//! bottom edge is moved back just far enough to sit flush against that edge,
//! but never past the origin. The correction goes through the bounding-rect
//! offset, so rotated shapes end flush too.

#[cfg(test)]
#[path = "reclamp_test.rs"]
mod reclamp_test;

use tracing::{debug, info, trace};

use crate::consts::OVERFLOW_EPSILON;
use crate::event::ResizeEvent;
use crate::geometry::Size;
use crate::shape::{Shape, ShapeId, ShapePatch};
use crate::surface::{Surface, SurfaceError};

/// Outcome of one resize pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reclamp {
    /// Size of the surface before the resize.
    pub previous: Size,
    /// Shapes that were moved, ordered by id, with the fields that changed.
    pub adjusted: Vec<(ShapeId, ShapePatch)>,
    /// Whether the surface should be redrawn once.
    pub render_needed: bool,
}

/// Apply the new dimensions to `surface` and re-fit its shapes if it shrank.
///
/// # Errors
///
/// Returns [`SurfaceError::InvalidDimensions`] without touching the surface
/// or any shape if the new dimensions are negative or not finite.
pub fn reclamp(surface: &mut Surface, event: ResizeEvent) -> Result<Reclamp, SurfaceError> {
    let previous = surface.set_dimensions(event.width, event.height)?;
    let size = surface.size();
    info!(
        old_width = previous.width,
        old_height = previous.height,
        width = size.width,
        height = size.height,
        "surface resized"
    );

    if !size.shrank_from(previous) || surface.is_empty() {
        trace!(shapes = surface.len(), "no shrink to correct");
        return Ok(Reclamp { previous, ..Default::default() });
    }

    let mut adjusted: Vec<(ShapeId, ShapePatch)> = surface
        .shapes_mut()
        .filter_map(|shape| {
            let patch = fit_inside(shape, size);
            (!patch.is_empty()).then_some((shape.id, patch))
        })
        .collect();
    adjusted.sort_by_key(|(id, _)| *id);

    debug!(adjusted = adjusted.len(), "reclamped after shrink");
    Ok(Reclamp { previous, adjusted, render_needed: true })
}

/// Move one shape back across the right and bottom edges of `size`.
///
/// Coordinates are refreshed first: the host may have written fields since
/// the last refresh.
fn fit_inside(shape: &mut Shape, size: Size) -> ShapePatch {
    shape.set_coords();
    let Some(rect) = shape.bounding_rect() else {
        trace!(id = %shape.id, "no coordinates; nothing to reclamp");
        return ShapePatch::default();
    };
    let before = shape.clone();

    if rect.right() > size.width + OVERFLOW_EPSILON {
        let flush = (size.width - rect.width).max(0.0);
        shape.left += flush - rect.left;
    }
    if rect.bottom() > size.height + OVERFLOW_EPSILON {
        let flush = (size.height - rect.height).max(0.0);
        shape.top += flush - rect.top;
    }
    shape.set_coords();

    ShapePatch::diff(&before, shape)
}
