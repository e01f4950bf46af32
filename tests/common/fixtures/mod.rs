mod assembly;
mod flight;

pub use assembly::*;
pub use flight::*;
