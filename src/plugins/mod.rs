mod assembly;
mod flight;

pub use assembly::{AssemblyPlugin, AssemblySet};
pub use flight::{vehicle_bundle, FlightPlugin, FlightSet};
