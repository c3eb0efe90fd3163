use std::collections::HashMap;

use tracing::{info, trace, warn};

use crate::clamp::{self, ScaleSession};
use crate::config::{ClampConfig, ClampPolicy, ConfigError};
use crate::event::{CanvasEvent, ResizeEvent, TransformEvent, TransformKind};
use crate::reclamp;
use crate::shape::{Shape, ShapeId, ShapePatch};
use crate::surface::Surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from event handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Write these fields back onto the host's object and refresh its coordinates.
    ShapeUpdated { id: ShapeId, fields: ShapePatch },
    /// Redraw the surface once.
    RenderNeeded,
}

/// Clamp engine: owns the mirrored surface and the per-gesture scale sessions.
///
/// Every handler is synchronous and never fails. A missing target, a missing
/// surface or a shape the surface does not know about all produce no actions.
#[derive(Debug, Default)]
pub struct ClampEngine {
    config: ClampConfig,
    surface: Option<Surface>,
    sessions: HashMap<ShapeId, ScaleSession>,
}

impl ClampEngine {
    /// Create an engine with the given policy and no surface attached.
    #[must_use]
    pub fn activate(config: ClampConfig) -> Self {
        info!(scale_policy = ?config.scale_policy, "clamp engine activated");
        Self { config, surface: None, sessions: HashMap::new() }
    }

    /// Create an engine configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the environment names an unknown policy.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::activate(ClampConfig::from_env()?))
    }

    // --- Surface ---

    /// Attach a surface, returning the previously attached one.
    ///
    /// Scale sessions belong to the old surface's gestures and are dropped.
    pub fn attach(&mut self, surface: Surface) -> Option<Surface> {
        info!(width = surface.width(), height = surface.height(), shapes = surface.len(), "surface attached");
        self.sessions.clear();
        self.surface.replace(surface)
    }

    /// Detach the current surface. Handlers become no-ops until the next attach.
    pub fn detach(&mut self) -> Option<Surface> {
        self.sessions.clear();
        let surface = self.surface.take();
        if surface.is_some() {
            info!("surface detached");
        }
        surface
    }

    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        self.surface.as_mut()
    }

    /// Insert or replace a shape on the attached surface.
    ///
    /// Returns `false` when no surface is attached.
    pub fn upsert_shape(&mut self, shape: Shape) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        surface.insert(shape);
        true
    }

    /// Remove a shape from the attached surface along with any gesture state for it.
    pub fn remove_shape(&mut self, id: &ShapeId) -> Option<Shape> {
        self.sessions.remove(id);
        self.surface.as_mut()?.remove(id)
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> ClampConfig {
        self.config
    }

    /// The scale session for an in-progress gesture on `id`, if any.
    #[must_use]
    pub fn session(&self, id: &ShapeId) -> Option<&ScaleSession> {
        self.sessions.get(id)
    }

    // --- Events ---

    /// Dispatch one event from the canvas engine or resize observer.
    pub fn handle(&mut self, event: CanvasEvent) -> Vec<Action> {
        match event {
            CanvasEvent::TransformStart { target } => {
                self.on_transform_start(target);
                Vec::new()
            }
            CanvasEvent::Transform(ev) => self.on_transform(ev),
            CanvasEvent::TransformEnd { target } => {
                self.on_transform_end(target);
                Vec::new()
            }
            CanvasEvent::Resize(ev) => self.on_surface_resize(ev),
        }
    }

    /// A gesture began on `target`: start a fresh scale session when the
    /// policy needs one, replacing anything left over from an earlier gesture.
    pub fn on_transform_start(&mut self, target: Option<ShapeId>) {
        let Some(id) = target else {
            return;
        };
        self.sessions.remove(&id);
        if self.config.scale_policy != ClampPolicy::ResistGrowth {
            return;
        }
        if let Some(shape) = self.surface.as_ref().and_then(|s| s.get(&id)) {
            self.sessions.insert(id, ScaleSession::begin(shape));
            trace!(%id, "scale session started");
        }
    }

    /// Clamp one step of a scale, move or rotate gesture.
    pub fn on_transform(&mut self, event: TransformEvent) -> Vec<Action> {
        let Some(id) = event.target else {
            trace!(kind = ?event.kind, "transform without target");
            return Vec::new();
        };
        let Some(surface) = self.surface.as_mut() else {
            trace!(%id, "transform before surface attached");
            return Vec::new();
        };
        let bounds = surface.size();
        let Some(shape) = surface.get_mut(&id) else {
            trace!(%id, "transform on unknown shape");
            return Vec::new();
        };

        let policy = self.config.scale_policy;
        let session = if event.kind == TransformKind::Scale && policy == ClampPolicy::ResistGrowth {
            Some(self.sessions.entry(id).or_insert_with(|| ScaleSession::begin(shape)))
        } else {
            None
        };

        let before = shape.clone();
        if !clamp::clamp_step(shape, event.kind, policy, bounds, session) {
            return Vec::new();
        }
        vec![Action::ShapeUpdated { id, fields: ShapePatch::diff(&before, shape) }]
    }

    /// The gesture on `target` finished; forget its remembered geometry.
    pub fn on_transform_end(&mut self, target: Option<ShapeId>) {
        if let Some(id) = target {
            if self.sessions.remove(&id).is_some() {
                trace!(%id, "scale session ended");
            }
        }
    }

    /// Apply new surface dimensions and re-fit shapes if the surface shrank.
    pub fn on_surface_resize(&mut self, event: ResizeEvent) -> Vec<Action> {
        let Some(surface) = self.surface.as_mut() else {
            trace!("resize before surface attached");
            return Vec::new();
        };
        match reclamp::reclamp(surface, event) {
            Ok(out) => {
                let mut actions: Vec<Action> = out
                    .adjusted
                    .into_iter()
                    .map(|(id, fields)| Action::ShapeUpdated { id, fields })
                    .collect();
                if out.render_needed {
                    actions.push(Action::RenderNeeded);
                }
                actions
            }
            Err(e) => {
                warn!(error = %e, "ignoring resize");
                Vec::new()
            }
        }
    }
}
