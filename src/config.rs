//! Clamp configuration parsed from environment variables or serialized config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::SCALE_POLICY_ENV;

/// How a scale gesture is kept inside the surface.
///
/// Move and rotate gestures always reposition; only scaling has a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    /// Shift the shape back inside using its bounding rectangle.
    #[default]
    Reposition,
    /// Refuse growth past the edges: snap back to the last valid geometry
    /// and cap the scale so the far edge sits on the boundary.
    ResistGrowth,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown clamp policy '{0}' (expected 'reposition' or 'resist_growth')")]
    UnknownPolicy(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClampConfig {
    /// Policy applied to scale events.
    pub scale_policy: ClampPolicy,
}

impl ClampConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `CLAMP_SCALE_POLICY`: `reposition` (default) or `resist_growth`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPolicy`] for an unrecognized policy name.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(SCALE_POLICY_ENV);
        let scale_policy = parse_policy(raw.as_deref().unwrap_or("reposition"))?;
        Ok(Self { scale_policy })
    }
}

impl std::str::FromStr for ClampPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_policy(s)
    }
}

fn parse_policy(raw: &str) -> Result<ClampPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "" | "reposition" => Ok(ClampPolicy::Reposition),
        "resist_growth" => Ok(ClampPolicy::ResistGrowth),
        _ => Err(ConfigError::UnknownPolicy(raw.to_string())),
    }
}
