pub mod config;

pub use config::{ConfigError, EditorConfig, FlightConfig, PhysicsConfig, SimulationConfig};
