pub mod aerodynamics;
pub mod assembly;
pub mod flight;

pub use aerodynamics::{compute_wing_forces, Curve, WingConfig, WingForces, CD, CL};
pub use assembly::{
    apply_assembly_commands_system, refresh_meshes_system, sync_assembly_profile_system,
};
pub use flight::{
    control_input_system, flight_force_system, force_application_system, step, telemetry_system,
    FlightForces, LiftingElement, StepOutput,
};
