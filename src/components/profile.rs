use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assembly::PartsStorage;
use crate::components::PartRole;

/// What the flight model needs to know about an assembly.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AssemblyProfile {
    /// Sum of part masses (kg).
    pub mass: f64,
    pub engine_count: usize,
    pub lifting_surface_count: usize,
}

impl AssemblyProfile {
    pub fn from_storage(storage: &PartsStorage) -> Self {
        storage
            .parts
            .iter()
            .fold(Self::default(), |mut profile, part| {
                profile.mass += part.kind.mass();
                match part.kind.role() {
                    PartRole::Engine => profile.engine_count += 1,
                    PartRole::LiftingSurface => profile.lifting_surface_count += 1,
                    PartRole::Structural => {}
                }
                profile
            })
    }

    pub fn has_thrust(&self) -> bool {
        self.engine_count > 0
    }

    pub fn has_lift(&self) -> bool {
        self.lifting_surface_count > 0
    }
}
