use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Force and mass bookkeeping handed to the external rigid-body integrator.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub inertia: Matrix3<f64>,
    pub forces: Vec<Force>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    /// Application point relative to the centre of mass, `None` for the CG itself.
    pub point: Option<Vector3<f64>>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
    Custom(String),
}

impl PhysicsComponent {
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Self {
        Self {
            mass,
            inertia,
            forces: Vec::new(),
        }
    }

    /// Point-mass body with a unit-diagonal inertia scaled by mass.
    pub fn with_mass(mass: f64) -> Self {
        Self::new(mass, Matrix3::identity() * mass)
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
    }

    /// Drop every force of one category, leaving the others for their owners.
    pub fn clear_category(&mut self, category: &ForceCategory) {
        self.forces.retain(|f| &f.category != category);
    }

    /// Sum of all body-frame forces and their moments about the centre of mass.
    pub fn body_resultant(&self) -> (Vector3<f64>, Vector3<f64>) {
        self.forces
            .iter()
            .filter(|f| f.frame == ReferenceFrame::Body)
            .fold((Vector3::zeros(), Vector3::zeros()), |(net, moment), f| {
                let arm = f.point.unwrap_or_else(Vector3::zeros);
                (net + f.vector, moment + arm.cross(&f.vector))
            })
    }
}
