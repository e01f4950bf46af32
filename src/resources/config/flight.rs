use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;
use crate::utils::{AREA_PER_MASS, MAIN_WING_FRACTION, MAX_ELEMENT_FORCE};

/// Tuning of the simplified flight model.
///
/// Lifting area scales with vehicle mass rather than with the actual wing
/// geometry. Gains are control-surface deflections in degrees per unit of
/// control input. Offsets are force application points in the body frame
/// (Y up, forward along -Z).
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Vehicle mass per square metre of total lifting area (kg/m²).
    pub area_per_mass: f64,
    /// Share of lifting area on the main wings; the rest goes to the elevators.
    pub main_wing_fraction: f64,
    /// Saturation bound on each element's lift and drag (N).
    pub force_limit: f64,
    pub aileron_gain: f64,
    pub elevator_pitch_gain: f64,
    pub elevator_roll_gain: f64,
    pub trim_gain: f64,
    pub rudder_gain: f64,
    pub airbrake_drag_coefficient: f64,
    /// VTOL lift as a multiple of weight at full setting.
    pub vtol_thrust_ratio: f64,
    pub left_wing_offset: Vector3<f64>,
    pub right_wing_offset: Vector3<f64>,
    pub left_elevator_offset: Vector3<f64>,
    pub right_elevator_offset: Vector3<f64>,
    pub rudder_offset: Vector3<f64>,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            area_per_mass: AREA_PER_MASS,
            main_wing_fraction: MAIN_WING_FRACTION,
            force_limit: MAX_ELEMENT_FORCE,
            aileron_gain: 20.0,
            elevator_pitch_gain: 20.0,
            elevator_roll_gain: 10.0,
            trim_gain: 10.0,
            rudder_gain: 20.0,
            airbrake_drag_coefficient: 1.2,
            vtol_thrust_ratio: 1.0,
            left_wing_offset: Vector3::new(-2.0, 0.0, 0.0),
            right_wing_offset: Vector3::new(2.0, 0.0, 0.0),
            left_elevator_offset: Vector3::new(-1.0, 0.0, 4.0),
            right_elevator_offset: Vector3::new(1.0, 0.0, 4.0),
            rudder_offset: Vector3::new(0.0, 1.0, 4.0),
        }
    }
}

impl FlightConfig {
    /// Total lifting area for a vehicle of `mass` kg.
    pub fn total_area(&self, mass: f64) -> f64 {
        mass / self.area_per_mass
    }

    /// Area of one main wing (left or right).
    pub fn main_wing_area(&self, mass: f64) -> f64 {
        self.total_area(mass) * self.main_wing_fraction / 2.0
    }

    /// Area of one elevator (left or right).
    pub fn elevator_area(&self, mass: f64) -> f64 {
        self.total_area(mass) * (1.0 - self.main_wing_fraction) / 2.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.area_per_mass <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "area_per_mass must be positive, got {}",
                self.area_per_mass
            )));
        }
        if !(0.0..=1.0).contains(&self.main_wing_fraction) {
            return Err(ConfigError::ValidationError(format!(
                "main_wing_fraction must lie in [0, 1], got {}",
                self.main_wing_fraction
            )));
        }
        if self.force_limit <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "force_limit must be positive, got {}",
                self.force_limit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area_split() {
        let config = FlightConfig::default();
        let mass = 1500.0;
        assert_relative_eq!(config.total_area(mass), 5.0);
        assert_relative_eq!(config.main_wing_area(mass), 2.0);
        assert_relative_eq!(config.elevator_area(mass), 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            2.0 * config.main_wing_area(mass) + 2.0 * config.elevator_area(mass),
            config.total_area(mass),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_fraction_out_of_range_is_rejected() {
        let config = FlightConfig {
            main_wing_fraction: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
