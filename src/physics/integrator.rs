use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{PhysicsComponent, ReferenceFrame, SpatialComponent};
use crate::resources::PhysicsConfig;
use crate::utils::SimError;

/// Reference rigid-body integrator standing in for an external physics engine.
///
/// Semi-implicit Euler over the forces handed over this tick, plus gravity
/// along world -Y. Only needed when no other engine drives the entities.
pub fn rigid_body_integrator_system(
    mut query: Query<(&PhysicsComponent, &mut SpatialComponent)>,
    config: Res<PhysicsConfig>,
) {
    for (physics, mut spatial) in query.iter_mut() {
        if let Err(e) = integrate_state(physics, &mut spatial, config.timestep, config.gravity) {
            warn!("Skipping integration: {}", e);
        }
    }
}

/// Advance `spatial` by `dt` under the forces recorded in `physics`.
pub fn integrate_state(
    physics: &PhysicsComponent,
    spatial: &mut SpatialComponent,
    dt: f64,
    gravity: f64,
) -> Result<(), SimError> {
    if physics.mass <= 0.0 {
        return Err(SimError::PhysicsError(format!(
            "non-positive mass {}",
            physics.mass
        )));
    }
    let inertia_inv = physics.inertia.try_inverse().ok_or_else(|| {
        SimError::PhysicsError("inertia tensor is not invertible".to_string())
    })?;

    let (body_force, body_moment) = physics.body_resultant();
    let inertial_force: Vector3<f64> = physics
        .forces
        .iter()
        .filter(|f| f.frame == ReferenceFrame::Inertial)
        .map(|f| f.vector)
        .sum();

    let acceleration = (spatial.attitude * body_force + inertial_force) / physics.mass
        + Vector3::new(0.0, -gravity, 0.0);
    spatial.velocity += acceleration * dt;
    spatial.position += spatial.velocity * dt;

    let omega = spatial.angular_velocity;
    let gyro_term = omega.cross(&(physics.inertia * omega));
    let angular_acceleration = inertia_inv * (body_moment - gyro_term);
    spatial.angular_velocity += angular_acceleration * dt;

    // Body rates compose on the right.
    let step = UnitQuaternion::from_scaled_axis(spatial.angular_velocity * dt);
    spatial.attitude = spatial.attitude * step;
    spatial.attitude.renormalize();

    Ok(())
}
