use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{ForceCategory, PhysicsComponent, SpatialComponent};
use crate::physics::{BodyRef, RigidBody};
use crate::systems::flight::FlightForces;
use crate::utils::is_zero;

/// Hand this tick's forces to the rigid-body collaborator.
///
/// Forces from the previous tick are withdrawn first, so the collaborator
/// only ever integrates one tick's worth.
pub fn apply_flight_forces(forces: &FlightForces, body: &mut impl RigidBody) {
    body.clear_forces(&ForceCategory::Aerodynamic);
    body.clear_forces(&ForceCategory::Propulsive);

    for element in &forces.elements {
        body.apply_local_force(element.force, element.offset, ForceCategory::Aerodynamic);
    }

    let at_centre = Vector3::zeros();
    if !is_zero(&forces.airbrake) {
        body.apply_local_force(forces.airbrake, at_centre, ForceCategory::Aerodynamic);
    }
    if !is_zero(&forces.thrust) {
        body.apply_local_force(forces.thrust, at_centre, ForceCategory::Propulsive);
    }
    if !is_zero(&forces.vtol) {
        body.apply_local_force(forces.vtol, at_centre, ForceCategory::Propulsive);
    }
}

pub fn force_application_system(
    mut query: Query<(&SpatialComponent, &mut PhysicsComponent, &FlightForces)>,
) {
    for (spatial, mut physics, forces) in query.iter_mut() {
        let mut body = BodyRef::new(spatial, &mut physics);
        apply_flight_forces(forces, &mut body);
    }
}
