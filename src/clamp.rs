//! Transform clamp: keeps one shape inside the surface during a gesture.
//!
//! Two policies exist for the same event stream:
//!
//! - [`reposition`] reads the shape's post-transform bounding rectangle and
//!   shifts `left` / `top` by exactly the amount the rendered extent crosses
//!   an edge. Move and rotate always use it.
//! - [`resist_growth`] only applies to scaling. It works on the raw fields,
//!   rejects a step that pushes `left`/`top` negative by restoring the last
//!   valid geometry, and caps the scale so the far edge lands on the boundary.
//!   The last valid geometry lives in a [`ScaleSession`] scoped to one shape
//!   and one gesture.
//!
//! An axis on which the shape is larger than the surface is never corrected
//! by [`reposition`]; no shrink-to-fit is attempted.

#[cfg(test)]
#[path = "clamp_test.rs"]
mod clamp_test;

use tracing::{debug, trace};

use crate::config::ClampPolicy;
use crate::consts::OVERFLOW_EPSILON;
use crate::event::TransformKind;
use crate::geometry::Size;
use crate::shape::{Shape, ShapeId};

/// Last known-valid offset and scale on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRecord {
    /// `left` or `top`.
    pub offset: f64,
    /// `scale_x` or `scale_y`.
    pub scale: f64,
}

/// Geometry remembered across the steps of one scale gesture on one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSession {
    target: ShapeId,
    x: AxisRecord,
    y: AxisRecord,
}

impl ScaleSession {
    /// Start a session from the shape's geometry before (or at) the first step.
    ///
    /// A negative starting offset is recorded as `0` so a snap-back never
    /// restores an out-of-bounds position.
    #[must_use]
    pub fn begin(shape: &Shape) -> Self {
        Self {
            target: shape.id,
            x: AxisRecord { offset: shape.left.max(0.0), scale: shape.scale_x },
            y: AxisRecord { offset: shape.top.max(0.0), scale: shape.scale_y },
        }
    }

    #[must_use]
    pub fn target(&self) -> ShapeId {
        self.target
    }

    /// Last valid horizontal geometry.
    #[must_use]
    pub fn horizontal(&self) -> AxisRecord {
        self.x
    }

    /// Last valid vertical geometry.
    #[must_use]
    pub fn vertical(&self) -> AxisRecord {
        self.y
    }
}

/// Clamp one gesture step according to `policy`.
///
/// Scaling under [`ClampPolicy::ResistGrowth`] needs a session; without one
/// the step falls back to [`reposition`]. Returns `true` if any field changed.
pub fn clamp_step(
    shape: &mut Shape,
    kind: TransformKind,
    policy: ClampPolicy,
    bounds: Size,
    session: Option<&mut ScaleSession>,
) -> bool {
    match (kind, policy, session) {
        (TransformKind::Scale, ClampPolicy::ResistGrowth, Some(session)) => resist_growth(shape, bounds, session),
        _ => reposition(shape, bounds),
    }
}

/// Shift the shape so its bounding rectangle lies within `bounds`.
///
/// Refreshes coordinates first so the rectangle reflects the in-progress
/// transform, and again after writing. Returns `true` if `left` or `top` moved.
pub fn reposition(shape: &mut Shape, bounds: Size) -> bool {
    shape.set_coords();
    let Some(rect) = shape.bounding_rect() else {
        trace!(id = %shape.id, "no coordinates; nothing to clamp");
        return false;
    };

    let dx = if bounds.fits_width(&rect) {
        edge_correction(rect.left, rect.width, bounds.width)
    } else {
        trace!(id = %shape.id, width = rect.width, limit = bounds.width, "wider than surface; x left alone");
        None
    };
    let dy = if bounds.fits_height(&rect) {
        edge_correction(rect.top, rect.height, bounds.height)
    } else {
        trace!(id = %shape.id, height = rect.height, limit = bounds.height, "taller than surface; y left alone");
        None
    };

    if dx.is_none() && dy.is_none() {
        return false;
    }

    let (dx, dy) = (dx.unwrap_or(0.0), dy.unwrap_or(0.0));
    shape.left += dx;
    shape.top += dy;
    shape.set_coords();
    debug!(id = %shape.id, dx, dy, left = shape.left, top = shape.top, "repositioned into surface");
    true
}

/// Offset that moves `[start, start + extent]` inside `[0, limit]`.
///
/// `None` when already inside. Assumes `extent <= limit`.
fn edge_correction(start: f64, extent: f64, limit: f64) -> Option<f64> {
    if start < -OVERFLOW_EPSILON {
        return Some(-start);
    }
    let overflow = start + extent - limit;
    (overflow > OVERFLOW_EPSILON).then_some(-overflow)
}

/// Resist a scale step that would carry the shape past an edge.
///
/// Per axis: a negative offset restores the session's last valid offset and
/// scale; otherwise the current values become the new valid record. Then, if
/// the far edge crosses the boundary, the scale is capped to fit exactly from
/// the remembered offset and the capped scale is remembered. Returns `true` if
/// any field changed.
pub fn resist_growth(shape: &mut Shape, bounds: Size, session: &mut ScaleSession) -> bool {
    let before = (shape.left, shape.top, shape.scale_x, shape.scale_y);

    resist_axis(&mut shape.left, &mut shape.scale_x, shape.width, bounds.width, &mut session.x);
    resist_axis(&mut shape.top, &mut shape.scale_y, shape.height, bounds.height, &mut session.y);

    let after = (shape.left, shape.top, shape.scale_x, shape.scale_y);
    if after == before {
        shape.set_coords();
        return false;
    }

    shape.set_coords();
    debug!(
        id = %shape.id,
        left = shape.left,
        top = shape.top,
        scale_x = shape.scale_x,
        scale_y = shape.scale_y,
        "scale held at surface edge"
    );
    true
}

fn resist_axis(offset: &mut f64, scale: &mut f64, extent: f64, limit: f64, last: &mut AxisRecord) {
    if extent <= 0.0 || !extent.is_finite() || !offset.is_finite() || !scale.is_finite() {
        return;
    }

    // Leading edge.
    if *offset < 0.0 {
        *offset = last.offset;
        *scale = last.scale;
    } else {
        last.offset = *offset;
        last.scale = *scale;
    }

    // Trailing edge.
    if *scale * extent + *offset > limit + OVERFLOW_EPSILON {
        let fit = (limit - last.offset) / extent;
        if fit > 0.0 {
            *scale = fit;
            last.scale = fit;
        }
    } else {
        last.scale = *scale;
    }
}
