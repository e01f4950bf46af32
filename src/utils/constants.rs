pub const GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // Fixed simulation step

// Aerodynamic saturation, symmetric about zero
pub const MAX_ELEMENT_FORCE: f64 = 100_000.0; // N

// Vehicle sizing
pub const AREA_PER_MASS: f64 = 300.0; // kg per m^2 of lifting area
pub const MAIN_WING_FRACTION: f64 = 0.8;

// Cross-section ring bounds enforced by the editor
pub const MIN_RING_POINTS: usize = 4;
pub const MAX_RING_POINTS: usize = 32;
pub const DEFAULT_RING_POINTS: usize = 16;
