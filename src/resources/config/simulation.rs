use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{EditorConfig, FlightConfig, PhysicsConfig};
use crate::resources::ConfigError;

#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub flight: FlightConfig,
    pub editor: EditorConfig,
}

impl SimulationConfig {
    /// Read and validate a YAML config. Missing sections take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        info!("Loaded simulation config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.flight.validate()?;
        self.editor.validate()
    }
}
