use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{ControlState, FlightTelemetry, PhysicsComponent, SpatialComponent};
use crate::physics::{BodyState, BodyView};
use crate::systems::flight::FlightForces;
use crate::utils::rad_to_deg;

/// Read-only projection of the vehicle state for display.
pub fn snapshot(
    body: &impl BodyState,
    controls: &ControlState,
    forces: &FlightForces,
) -> FlightTelemetry {
    let velocity = body.linear_velocity();
    let position = body.position();
    let (aoa, aos, local_velocity) = forces
        .main_wing()
        .map_or((0.0, 0.0, Vector3::zeros()), |w| (w.aoa, w.aos, w.local_vel));

    FlightTelemetry {
        speed: velocity.norm(),
        altitude: position.y,
        vertical_speed: velocity.y,
        throttle_percent: controls.throttle * 100.0,
        angle_of_attack: rad_to_deg(aoa),
        sideslip: rad_to_deg(aos),
        local_velocity,
        position,
    }
}

pub fn telemetry_system(
    mut query: Query<(
        &SpatialComponent,
        &PhysicsComponent,
        &ControlState,
        &FlightForces,
        &mut FlightTelemetry,
    )>,
) {
    for (spatial, physics, controls, forces, mut telemetry) in query.iter_mut() {
        *telemetry = snapshot(&BodyView::new(spatial, physics), controls, forces);
    }
}
