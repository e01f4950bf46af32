use bevy::prelude::*;

use crate::components::{
    AssemblyProfile, ControlInputs, ControlState, FlightTelemetry, PhysicsComponent,
    SpatialComponent,
};
use crate::physics::rigid_body_integrator_system;
use crate::resources::SimulationConfig;
use crate::systems::{
    control_input_system, flight_force_system, force_application_system, telemetry_system,
    FlightForces,
};

/// Flight model stages, run in this order every fixed tick.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Forces,
    Apply,
    Telemetry,
}

/// Flight model for every entity carrying a [`vehicle_bundle`].
///
/// With `integrate` set the crate's reference integrator advances the bodies
/// inside [`FlightSet::Apply`]; leave it off when another physics engine owns
/// `SpatialComponent`.
pub struct FlightPlugin {
    pub config: SimulationConfig,
    pub integrate: bool,
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            integrate: true,
        }
    }
}

impl FlightPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn without_integration(mut self) -> Self {
        self.integrate = false;
        self
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "Flight model at {:.1} Hz, integration {}",
            1.0 / self.config.physics.timestep,
            if self.integrate { "on" } else { "off" }
        );

        app.insert_resource(self.config.clone())
            .insert_resource(self.config.physics.clone())
            .insert_resource(self.config.flight.clone())
            .init_resource::<ControlInputs>()
            .insert_resource(Time::<Fixed>::from_seconds(self.config.physics.timestep));

        app.configure_sets(
            FixedUpdate,
            (
                FlightSet::Input,
                FlightSet::Forces,
                FlightSet::Apply,
                FlightSet::Telemetry,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                control_input_system.in_set(FlightSet::Input),
                flight_force_system.in_set(FlightSet::Forces),
                force_application_system.in_set(FlightSet::Apply),
                telemetry_system.in_set(FlightSet::Telemetry),
            ),
        );

        if self.integrate {
            app.add_systems(
                FixedUpdate,
                rigid_body_integrator_system
                    .in_set(FlightSet::Apply)
                    .after(force_application_system),
            );
        }
    }
}

/// Components a flying entity needs, sized from its assembly profile.
pub fn vehicle_bundle(
    profile: AssemblyProfile,
    spatial: SpatialComponent,
) -> (
    AssemblyProfile,
    SpatialComponent,
    PhysicsComponent,
    ControlState,
    FlightForces,
    FlightTelemetry,
) {
    (
        profile,
        spatial,
        PhysicsComponent::with_mass(profile.mass),
        ControlState::default(),
        FlightForces::default(),
        FlightTelemetry::default(),
    )
}
