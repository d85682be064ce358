//! Error types for construction and stepping.
//!
//! Everything here is a configuration error: it is raised at the call that
//! introduced the bad value (shape construction, body construction, world
//! configuration, `step`) and never coerced into a silently wrong physical
//! result. Geometric degeneracies that arise mid-step (a zero-length
//! separation axis, a sphere centre inside a box) are handled internally
//! with deterministic fallbacks and never surface as errors.

use thiserror::Error;

use crate::types::Vec3;

/// Errors raised at the configuration boundary.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Sphere constructed with a non-positive or non-finite radius.
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// Box constructed with bounds that do not satisfy `min < max` on every axis.
    #[error("aabb bounds must satisfy min < max on every axis, got min {min:?} max {max:?}")]
    InvalidBounds { min: Vec3, max: Vec3 },

    /// Dynamic body constructed with a non-positive or non-finite mass.
    #[error("dynamic body mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    /// `step` called with a timestep that is not a positive finite number.
    #[error("step requires a positive finite dt, got {0}")]
    InvalidTimestep(f64),

    /// A configuration value is outside its allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Config file does not exist.
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    /// Reading a config file failed.
    #[error("config io error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Parsing a config file failed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_radius() {
        let err = PhysicsError::InvalidRadius(-1.0);
        let msg = format!("{err}");
        assert!(msg.contains("radius"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn error_display_bounds() {
        let err = PhysicsError::InvalidBounds {
            min: Vec3::new(1.0, 0.0, 0.0),
            max: Vec3::new(-1.0, 1.0, 1.0),
        };
        let msg = format!("{err}");
        assert!(msg.contains("min < max"));
    }

    #[test]
    fn error_display_timestep() {
        let err = PhysicsError::InvalidTimestep(-0.016);
        let msg = format!("{err}");
        assert!(msg.contains("dt"));
        assert!(msg.contains("-0.016"));
    }
}
