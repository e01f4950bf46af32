use bevy::prelude::*;

use crate::components::{ControlChannel, ControlInputs, ControlState};
use crate::resources::PhysicsConfig;

/// Advance the control state by one tick.
///
/// Pitch, roll and yaw follow the held keys directly. Throttle, airbrake,
/// VTOL and trim move towards their target at one unit per second. The
/// airbrake extends while held and retracts otherwise.
pub fn integrate_controls(state: &ControlState, inputs: &ControlInputs, dt: f64) -> ControlState {
    use ControlChannel::*;

    let airbrake_direction = if inputs.pressed(Airbrake) { 1.0 } else { -1.0 };

    ControlState {
        pitch: inputs.axis(PitchUp, PitchDown),
        roll: inputs.axis(RollLeft, RollRight),
        yaw: inputs.axis(YawLeft, YawRight),
        throttle: rate_limit(state.throttle, inputs.axis(ThrottleUp, ThrottleDown), dt, 0.0),
        airbrake: rate_limit(state.airbrake, airbrake_direction, dt, 0.0),
        vtol: rate_limit(state.vtol, inputs.axis(VtolUp, VtolDown), dt, 0.0),
        trim: rate_limit(state.trim, inputs.axis(TrimUp, TrimDown), dt, -1.0),
    }
}

#[inline]
fn rate_limit(value: f64, direction: f64, dt: f64, lower: f64) -> f64 {
    (value + direction * dt).clamp(lower, 1.0)
}

pub fn control_input_system(
    inputs: Res<ControlInputs>,
    config: Res<PhysicsConfig>,
    mut query: Query<&mut ControlState>,
) {
    for mut state in query.iter_mut() {
        *state = integrate_controls(&state, &inputs, config.timestep);
    }
}
