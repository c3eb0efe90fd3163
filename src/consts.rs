//! Shared numeric constants for the clamp crate.

// ── Geometry ────────────────────────────────────────────────────

/// Tolerance below which a bounding-rect overflow is treated as zero.
///
/// Rotated corners go through `sin`/`cos`, so an edge that was placed exactly
/// flush can read back a few ULPs outside the surface on the next frame.
pub const OVERFLOW_EPSILON: f64 = 1e-9;

// ── Configuration ───────────────────────────────────────────────

/// Environment variable selecting the scale-event clamp policy.
pub const SCALE_POLICY_ENV: &str = "CLAMP_SCALE_POLICY";
