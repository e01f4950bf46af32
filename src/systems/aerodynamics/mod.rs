pub mod curves;
pub mod wing;

pub use curves::{Curve, CD, CL};
pub use wing::{compute_wing_forces, WingConfig, WingForces};
