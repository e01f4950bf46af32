use nalgebra::{UnitQuaternion, Vector3};

use crate::systems::aerodynamics::{CD, CL};
use crate::utils::{rad_to_deg, MAX_ELEMENT_FORCE, SEA_LEVEL_DENSITY};

/// One lifting element's inputs for a single evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct WingConfig {
    /// World-frame velocity of the body (m/s).
    pub velocity: Vector3<f64>,
    /// Rotation from body to world frame.
    pub attitude: UnitQuaternion<f64>,
    pub air_density: f64,
    /// Reference area (m²).
    pub area: f64,
    /// Wing normal in the body frame.
    pub up: Vector3<f64>,
    /// Chord direction, leading edge first, in the body frame.
    pub forward: Vector3<f64>,
    /// Control-surface deflection (deg), added to the angle of attack.
    pub input: f64,
    /// Symmetric saturation bound on lift and drag (N).
    pub force_limit: f64,
}

impl Default for WingConfig {
    fn default() -> Self {
        Self {
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            air_density: SEA_LEVEL_DENSITY,
            area: 1.0,
            up: Vector3::y(),
            forward: -Vector3::z(),
            input: 0.0,
            force_limit: MAX_ELEMENT_FORCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WingForces {
    /// Angle of attack (rad), without the control input.
    pub aoa: f64,
    /// Sideslip (rad).
    pub aos: f64,
    pub lift_force: f64,
    pub drag_force: f64,
    /// Velocity along the wing's right, up and forward axes (m/s).
    pub local_vel: Vector3<f64>,
    pub cl: f64,
    pub cd: f64,
}

/// Lift and drag magnitudes for one lifting element.
///
/// Pure function of its inputs; every element of a vehicle is evaluated
/// independently.
pub fn compute_wing_forces(config: &WingConfig) -> WingForces {
    let up = config.attitude * config.up;
    let forward = config.attitude * config.forward;
    let right = forward.cross(&up);

    let v = &config.velocity;
    let local_vel = Vector3::new(v.dot(&right), v.dot(&up), v.dot(&forward));

    let aoa = (-local_vel.y).atan2(local_vel.z);
    let aos = local_vel.x.atan2(local_vel.z);

    let effective_aoa = rad_to_deg(aoa) + config.input;
    let cl = CL.evaluate(effective_aoa);
    let cd = CD.evaluate(effective_aoa);

    let speed = v.norm();
    let q = 0.5 * config.air_density * speed * speed;
    let limit = config.force_limit;

    WingForces {
        aoa,
        aos,
        lift_force: (q * config.area * cl).clamp(-limit, limit),
        drag_force: (q * config.area * cd).clamp(-limit, limit),
        local_vel,
        cl,
        cd,
    }
}
