pub mod apply;
pub mod controls;
pub mod forces;
pub mod stepper;
pub mod telemetry;

pub use apply::{apply_flight_forces, force_application_system};
pub use controls::{control_input_system, integrate_controls};
pub use forces::{
    compute_flight_forces, flight_force_system, ElementForce, FlightForces, LiftingElement,
};
pub use stepper::{step, StepOutput};
pub use telemetry::{snapshot, telemetry_system};
