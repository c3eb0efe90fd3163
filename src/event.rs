//! Event model: what the host canvas engine and resize observer report.
//!
//! Transform events arrive once per gesture step while the user drags a
//! handle. `TransformStart` / `TransformEnd` bracket a gesture so that state
//! remembered across steps never outlives it. Resize events carry the new
//! container dimensions.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::{Deserialize, Serialize};

use crate::shape::ShapeId;

/// Which interactive transform produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    /// The shape is being scaled from one of its handles.
    Scale,
    /// The shape body is being dragged.
    Move,
    /// The shape is being rotated from its rotate handle.
    Rotate,
}

/// One step of an in-progress transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformEvent {
    /// Transform that produced this step.
    pub kind: TransformKind,
    /// Shape being transformed. `None` means there is nothing to clamp.
    pub target: Option<ShapeId>,
}

impl TransformEvent {
    #[must_use]
    pub fn scale(target: ShapeId) -> Self {
        Self { kind: TransformKind::Scale, target: Some(target) }
    }

    #[must_use]
    pub fn moving(target: ShapeId) -> Self {
        Self { kind: TransformKind::Move, target: Some(target) }
    }

    #[must_use]
    pub fn rotate(target: ShapeId) -> Self {
        Self { kind: TransformKind::Rotate, target: Some(target) }
    }
}

/// New dimensions of the observed container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub width: f64,
    pub height: f64,
}

/// Everything the engine subscribes to, as a single stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanvasEvent {
    /// A gesture on `target` began (pointer down on a handle or body).
    TransformStart { target: Option<ShapeId> },
    /// One step of a scale, move or rotate gesture.
    Transform(TransformEvent),
    /// The gesture on `target` finished and its result was committed.
    TransformEnd { target: Option<ShapeId> },
    /// The surface container changed size.
    Resize(ResizeEvent),
}
