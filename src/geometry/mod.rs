pub mod bridge;
pub mod cache;
pub mod profile;
pub mod segments;

pub use bridge::{build_bridge, flatten_positions, remap_index, triangle_count};
pub use cache::{MeshCache, MeshCacheStats};
pub use profile::{generate_circle_points, generate_profile, Ring};
pub use segments::{
    bridge_placed, build_chain, build_connection_mesh, build_part_mesh, connection_pairs,
    derive_rings, effective_profiles, world_ring, PlacedShape,
};
