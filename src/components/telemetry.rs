use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Read-only per-tick projection of the vehicle state for display.
#[derive(Component, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightTelemetry {
    /// Airspeed magnitude (m/s).
    pub speed: f64,
    /// Height above the world origin (m).
    pub altitude: f64,
    /// Climb rate (m/s).
    pub vertical_speed: f64,
    /// Throttle setting (%).
    pub throttle_percent: f64,
    /// Angle of attack of the main wing (deg).
    pub angle_of_attack: f64,
    /// Sideslip of the main wing (deg).
    pub sideslip: f64,
    /// Velocity projected on the wing's right/up/forward axes (m/s).
    pub local_velocity: Vector3<f64>,
    /// World position (m).
    pub position: Vector3<f64>,
}
