use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{Force, ForceCategory, PhysicsComponent, ReferenceFrame, SpatialComponent};

/// Kinematic state reported by the rigid-body collaborator.
pub trait BodyState {
    /// World position (m).
    fn position(&self) -> Vector3<f64>;
    /// Rotation from body to world frame.
    fn attitude(&self) -> UnitQuaternion<f64>;
    /// World-frame linear velocity (m/s).
    fn linear_velocity(&self) -> Vector3<f64>;
    fn mass(&self) -> f64;
}

/// The rigid-body collaborator as seen by the flight model.
///
/// The flight model only queries kinematic state and hands over forces; it
/// never integrates motion itself.
pub trait RigidBody: BodyState {
    /// Apply a body-frame force at a body-frame offset from the centre of mass.
    fn apply_local_force(
        &mut self,
        force: Vector3<f64>,
        point: Vector3<f64>,
        category: ForceCategory,
    );
    /// Withdraw every force of `category` handed over on an earlier tick.
    fn clear_forces(&mut self, category: &ForceCategory);
}

/// A bevy entity's view of the collaborator: read-only kinematics plus the
/// force list the integrator consumes.
pub struct BodyRef<'a> {
    pub spatial: &'a SpatialComponent,
    pub physics: &'a mut PhysicsComponent,
}

impl<'a> BodyRef<'a> {
    pub fn new(spatial: &'a SpatialComponent, physics: &'a mut PhysicsComponent) -> Self {
        Self { spatial, physics }
    }
}

/// Read-only counterpart of [`BodyRef`].
#[derive(Clone, Copy)]
pub struct BodyView<'a> {
    pub spatial: &'a SpatialComponent,
    pub physics: &'a PhysicsComponent,
}

impl<'a> BodyView<'a> {
    pub fn new(spatial: &'a SpatialComponent, physics: &'a PhysicsComponent) -> Self {
        Self { spatial, physics }
    }
}

impl BodyState for BodyView<'_> {
    fn position(&self) -> Vector3<f64> {
        self.spatial.position
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.spatial.attitude
    }

    fn linear_velocity(&self) -> Vector3<f64> {
        self.spatial.velocity
    }

    fn mass(&self) -> f64 {
        self.physics.mass
    }
}

impl BodyState for BodyRef<'_> {
    fn position(&self) -> Vector3<f64> {
        self.spatial.position
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.spatial.attitude
    }

    fn linear_velocity(&self) -> Vector3<f64> {
        self.spatial.velocity
    }

    fn mass(&self) -> f64 {
        self.physics.mass
    }
}

impl RigidBody for BodyRef<'_> {
    fn apply_local_force(
        &mut self,
        force: Vector3<f64>,
        point: Vector3<f64>,
        category: ForceCategory,
    ) {
        self.physics.add_force(Force {
            vector: force,
            point: Some(point),
            frame: ReferenceFrame::Body,
            category,
        });
    }

    fn clear_forces(&mut self, category: &ForceCategory) {
        self.physics.clear_category(category);
    }
}
