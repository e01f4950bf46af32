pub mod integrator;
pub mod traits;

pub use integrator::{integrate_state, rigid_body_integrator_system};
pub use traits::{BodyRef, BodyState, BodyView, RigidBody};
