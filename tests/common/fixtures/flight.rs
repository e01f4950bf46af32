use hangar::components::{AssemblyProfile, SpatialComponent};
use nalgebra::Vector3;

pub fn create_test_profile() -> AssemblyProfile {
    AssemblyProfile {
        mass: 1500.0,
        engine_count: 1,
        lifting_surface_count: 2,
    }
}

/// Level flight at 1 km, 60 m/s along body forward.
pub fn create_test_spatial() -> SpatialComponent {
    SpatialComponent::at_position_and_airspeed(Vector3::new(0.0, 1000.0, 0.0), 60.0)
}
