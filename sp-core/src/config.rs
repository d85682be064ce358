//! World configuration loader.
//!
//! The tunable parameters live in one serde-derived struct so a demo scene
//! can ship its physics setup as a YAML file instead of recompiling:
//!
//! ```yaml
//! gravity: { x: 0.0, y: -9.8, z: 0.0 }
//! restitution: 0.3
//! fixed_timestep: 0.016666
//! ```
//!
//! Missing keys fall back to the defaults, and every value is validated
//! before a world is built from it.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::types::{constants, Vec3};

/// Tunable world parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Constant acceleration applied to every dynamic body, in m/s².
    pub gravity: Vec3,

    /// Fraction of the approach speed preserved along the contact normal,
    /// in [0, 1]. The default is near-inelastic so bodies settle under
    /// gravity instead of bouncing forever.
    pub restitution: f64,

    /// Reflected normal speeds below this settle to exactly zero, in m/s.
    /// Keeps resting contact from jittering at fixed-step cadences.
    pub rest_velocity: f64,

    /// Timestep used by `World::step_fixed`, in seconds.
    pub fixed_timestep: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -constants::GRAVITY, 0.0),
            restitution: 0.2,
            rest_velocity: 0.05,
            fixed_timestep: 1.0 / 60.0,
        }
    }
}

impl WorldConfig {
    /// Checks that every value is inside its allowed range.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        if !self.restitution.is_finite() || !(0.0..=1.0).contains(&self.restitution) {
            return Err(PhysicsError::InvalidConfig(format!(
                "restitution must be within [0, 1], got {}",
                self.restitution
            )));
        }
        if !self.rest_velocity.is_finite() || self.rest_velocity < 0.0 {
            return Err(PhysicsError::InvalidConfig(format!(
                "rest velocity must be non-negative and finite, got {}",
                self.rest_velocity
            )));
        }
        if !self.fixed_timestep.is_finite() || self.fixed_timestep <= 0.0 {
            return Err(PhysicsError::InvalidConfig(format!(
                "fixed timestep must be positive and finite, got {}",
                self.fixed_timestep
            )));
        }
        Ok(())
    }

    /// Parses and validates a config from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, PhysicsError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, PhysicsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PhysicsError::ConfigNotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        debug!("loaded world config from {}", path.display());
        Ok(config)
    }
}

// =============================================================================
// Tests
// =============================================================================
