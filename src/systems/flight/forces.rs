use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AssemblyProfile, ControlState, PhysicsComponent, SpatialComponent};
use crate::physics::{BodyState, BodyView};
use crate::resources::{FlightConfig, PhysicsConfig};
use crate::systems::aerodynamics::{compute_wing_forces, WingConfig, WingForces};

/// The independent lifting elements every vehicle is modelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiftingElement {
    LeftWing,
    RightWing,
    LeftElevator,
    RightElevator,
    Rudder,
}

impl LiftingElement {
    pub const ALL: [LiftingElement; 5] = [
        LiftingElement::LeftWing,
        LiftingElement::RightWing,
        LiftingElement::LeftElevator,
        LiftingElement::RightElevator,
        LiftingElement::Rudder,
    ];

    /// Surface normal in the body frame. The rudder's points to the right.
    pub fn up(&self) -> Vector3<f64> {
        match self {
            LiftingElement::Rudder => Vector3::x(),
            _ => Vector3::y(),
        }
    }

    pub fn forward(&self) -> Vector3<f64> {
        -Vector3::z()
    }

    pub fn offset(&self, config: &FlightConfig) -> Vector3<f64> {
        match self {
            LiftingElement::LeftWing => config.left_wing_offset,
            LiftingElement::RightWing => config.right_wing_offset,
            LiftingElement::LeftElevator => config.left_elevator_offset,
            LiftingElement::RightElevator => config.right_elevator_offset,
            LiftingElement::Rudder => config.rudder_offset,
        }
    }

    /// Reference area for a vehicle of `mass` kg. The rudder shares the
    /// elevator sizing.
    pub fn area(&self, config: &FlightConfig, mass: f64) -> f64 {
        match self {
            LiftingElement::LeftWing | LiftingElement::RightWing => config.main_wing_area(mass),
            _ => config.elevator_area(mass),
        }
    }

    /// Control-surface deflection (deg) for the current controls.
    ///
    /// Roll and yaw are positive to the left, pitch positive nose up. The
    /// elevators sit behind the centre of mass, so nose-up needs them to
    /// push down.
    pub fn input(&self, controls: &ControlState, config: &FlightConfig) -> f64 {
        let elevator = -controls.pitch * config.elevator_pitch_gain - controls.trim * config.trim_gain;
        let elevator_roll = controls.roll * config.elevator_roll_gain;
        match self {
            LiftingElement::LeftWing => controls.roll * -config.aileron_gain,
            LiftingElement::RightWing => controls.roll * config.aileron_gain,
            LiftingElement::LeftElevator => elevator - elevator_roll,
            LiftingElement::RightElevator => elevator + elevator_roll,
            LiftingElement::Rudder => controls.yaw * config.rudder_gain,
        }
    }
}

/// One element's evaluation and the body-frame force it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementForce {
    pub element: LiftingElement,
    pub wing: WingForces,
    /// Lift along the element normal plus drag against the airflow (N).
    pub force: Vector3<f64>,
    /// Application point in the body frame (m).
    pub offset: Vector3<f64>,
}

/// Everything the force stage computed this tick, in the body frame.
#[derive(Component, Debug, Clone, PartialEq, Default)]
pub struct FlightForces {
    pub elements: Vec<ElementForce>,
    pub airbrake: Vector3<f64>,
    pub thrust: Vector3<f64>,
    pub vtol: Vector3<f64>,
}

impl FlightForces {
    pub fn element(&self, element: LiftingElement) -> Option<&ElementForce> {
        self.elements.iter().find(|e| e.element == element)
    }

    /// Air data of the left main wing, which telemetry reports.
    pub fn main_wing(&self) -> Option<&WingForces> {
        self.element(LiftingElement::LeftWing).map(|e| &e.wing)
    }

    pub fn net_force(&self) -> Vector3<f64> {
        self.elements.iter().map(|e| e.force).sum::<Vector3<f64>>()
            + self.airbrake
            + self.thrust
            + self.vtol
    }
}

/// Compute every force the vehicle produces this tick.
///
/// Lifting elements are only modelled when the assembly has a lifting
/// surface, thrust and VTOL lift only when it has an engine.
pub fn compute_flight_forces(
    body: &impl BodyState,
    controls: &ControlState,
    profile: &AssemblyProfile,
    flight: &FlightConfig,
    physics: &PhysicsConfig,
) -> FlightForces {
    let mass = body.mass();
    let attitude = body.attitude();
    let velocity = body.linear_velocity();

    let body_velocity = attitude.inverse() * velocity;
    let against_airflow = body_velocity
        .try_normalize(1e-9)
        .map_or_else(Vector3::zeros, |v| -v);

    let elements = if profile.has_lift() {
        LiftingElement::ALL
            .iter()
            .map(|element| {
                let wing = compute_wing_forces(&WingConfig {
                    velocity,
                    attitude,
                    air_density: physics.air_density,
                    area: element.area(flight, mass),
                    up: element.up(),
                    forward: element.forward(),
                    input: element.input(controls, flight),
                    force_limit: flight.force_limit,
                });
                let force = element.up() * wing.lift_force + against_airflow * wing.drag_force;
                ElementForce {
                    element: *element,
                    wing,
                    force,
                    offset: element.offset(flight),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let speed = velocity.norm();
    let q = 0.5 * physics.air_density * speed * speed;
    let main_area = 2.0 * flight.main_wing_area(mass);
    let airbrake_drag = (q * main_area * controls.airbrake * flight.airbrake_drag_coefficient)
        .min(flight.force_limit);

    let weight = mass * physics.gravity;
    let (thrust, vtol) = if profile.has_thrust() {
        (
            -Vector3::z() * weight * controls.throttle,
            Vector3::y() * weight * controls.vtol * flight.vtol_thrust_ratio,
        )
    } else {
        (Vector3::zeros(), Vector3::zeros())
    };

    FlightForces {
        elements,
        airbrake: against_airflow * airbrake_drag,
        thrust,
        vtol,
    }
}

pub fn flight_force_system(
    mut query: Query<(
        &SpatialComponent,
        &PhysicsComponent,
        &ControlState,
        &AssemblyProfile,
        &mut FlightForces,
    )>,
    flight: Res<FlightConfig>,
    physics: Res<PhysicsConfig>,
) {
    for (spatial, body, controls, profile, mut forces) in query.iter_mut() {
        let view = BodyView::new(spatial, body);
        *forces = compute_flight_forces(&view, controls, profile, &flight, &physics);
    }
}
