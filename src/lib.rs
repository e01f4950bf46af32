pub mod assembly;
pub mod components;
pub mod geometry;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
