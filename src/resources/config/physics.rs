use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;
use crate::utils::{DEFAULT_TIMESTEP, GRAVITY, SEA_LEVEL_DENSITY};

/// World constants shared by the force model and the rigid-body collaborator.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed tick length (s).
    pub timestep: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Air density used for dynamic pressure (kg/m³).
    pub air_density: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            gravity: GRAVITY,
            air_density: SEA_LEVEL_DENSITY,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timestep <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if self.air_density < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "air density cannot be negative, got {}",
                self.air_density
            )));
        }
        Ok(())
    }
}
