//! Keeps interactively manipulated shapes inside the visible bounds of a
//! resizable drawing surface.
//!
//! The host canvas engine owns rendering, hit-testing and the gesture stream.
//! This crate mirrors the geometry it needs in a [`surface::Surface`] and
//! reacts to two event families: per-step transform events (scale, move,
//! rotate) and surface resizes. Corrections come back to the host as
//! [`engine::Action`]s to apply to its own objects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Activation, event dispatch and per-gesture session bookkeeping |
//! | [`clamp`] | Transform clamp: reposition and resist-growth policies |
//! | [`reclamp`] | Re-fitting shapes after the surface shrinks |
//! | [`surface`] | Drawing surface dimensions and its shape store |
//! | [`shape`] | Shape model, bounding-rect cache and sparse patches |
//! | [`event`] | Transform, gesture-boundary and resize events |
//! | [`geometry`] | Points, sizes and axis-aligned rectangles |
//! | [`config`] | Policy selection from env or serialized config |
//! | [`consts`] | Shared numeric constants |

pub mod clamp;
pub mod config;
pub mod consts;
pub mod engine;
pub mod event;
pub mod geometry;
pub mod reclamp;
pub mod shape;
pub mod surface;
