pub mod editor;
pub mod error;
pub mod flight;
pub mod physics;
pub mod simulation;

pub use editor::EditorConfig;
pub use error::ConfigError;
pub use flight::FlightConfig;
pub use physics::PhysicsConfig;
pub use simulation::SimulationConfig;
