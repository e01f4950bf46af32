use crate::components::{AssemblyProfile, ControlInputs, ControlState, FlightTelemetry};
use crate::physics::RigidBody;
use crate::resources::{FlightConfig, PhysicsConfig};
use crate::systems::flight::{
    apply_flight_forces, compute_flight_forces, integrate_controls, snapshot, FlightForces,
};

/// Result of one [`step`].
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    pub controls: ControlState,
    pub forces: FlightForces,
    pub telemetry: FlightTelemetry,
}

/// One tick of the flight model outside of any scheduler.
///
/// Runs the stages in their fixed order: sample controls, compute forces,
/// hand them to `body`, snapshot telemetry. The body is not advanced; that is
/// the collaborator's job between ticks.
pub fn step(
    body: &mut impl RigidBody,
    controls: &ControlState,
    inputs: &ControlInputs,
    profile: &AssemblyProfile,
    flight: &FlightConfig,
    physics: &PhysicsConfig,
) -> StepOutput {
    let controls = integrate_controls(controls, inputs, physics.timestep);
    let forces = compute_flight_forces(&*body, &controls, profile, flight, physics);
    apply_flight_forces(&forces, &mut *body);
    let telemetry = snapshot(&*body, &controls, &forces);

    StepOutput {
        controls,
        forces,
        telemetry,
    }
}
