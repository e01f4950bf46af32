use bevy::prelude::*;
use nalgebra::Vector3;
use std::collections::HashMap;
use std::hash::Hash;

use crate::assembly::PartsStorage;
use crate::components::{PartId, ShapeSegments};
use crate::geometry::{bridge_placed, build_part_mesh, connection_pairs, PlacedShape};

/// Counters from one [`MeshCache::refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshCacheStats {
    /// Meshes built because their inputs were new or changed.
    pub generated: usize,
    /// Meshes kept because their inputs were unchanged.
    pub reused: usize,
    /// Meshes dropped, either superseded by a rebuild or no longer needed.
    pub released: usize,
}

impl MeshCacheStats {
    fn merge(self, other: Self) -> Self {
        Self {
            generated: self.generated + other.generated,
            reused: self.reused + other.reused,
            released: self.released + other.released,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedMesh<K> {
    key: K,
    positions: Vec<Vector3<f64>>,
}

/// Memoized part and connection meshes.
///
/// Part meshes live in the part's local frame and depend only on its shape;
/// connection meshes are in world space and depend on both parts' shapes and
/// transforms. Each entry is rebuilt only when its inputs change.
#[derive(Resource, Debug, Default)]
pub struct MeshCache {
    parts: HashMap<PartId, CachedMesh<ShapeSegments>>,
    connections: HashMap<(PartId, PartId), CachedMesh<(PlacedShape, PlacedShape)>>,
    last_stats: MeshCacheStats,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the cache in line with `storage`.
    pub fn refresh(&mut self, storage: &PartsStorage) -> MeshCacheStats {
        let wanted_parts = storage
            .parts
            .iter()
            .map(|p| (p.id, p.shape_segments.clone()))
            .collect();
        let part_stats = sync(&mut self.parts, wanted_parts, build_part_mesh);

        let wanted_connections = connection_pairs(storage)
            .into_iter()
            .filter_map(|(a, b)| {
                let key = (
                    PlacedShape::of(storage.find_part(a)?),
                    PlacedShape::of(storage.find_part(b)?),
                );
                Some(((a, b), key))
            })
            .collect();
        let connection_stats = sync(&mut self.connections, wanted_connections, |(a, b)| {
            bridge_placed(a, b)
        });

        let stats = part_stats.merge(connection_stats);
        if stats.generated > 0 || stats.released > 0 {
            debug!(
                "Mesh cache refresh: {} generated, {} reused, {} released",
                stats.generated, stats.reused, stats.released
            );
        }
        self.last_stats = stats;
        stats
    }

    pub fn part_mesh(&self, id: PartId) -> Option<&[Vector3<f64>]> {
        self.parts.get(&id).map(|m| m.positions.as_slice())
    }

    pub fn connection_mesh(&self, a: PartId, b: PartId) -> Option<&[Vector3<f64>]> {
        self.connections.get(&(a, b)).map(|m| m.positions.as_slice())
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn last_stats(&self) -> MeshCacheStats {
        self.last_stats
    }

    /// Release everything. Returns how many meshes were dropped.
    pub fn clear(&mut self) -> usize {
        let released = self.parts.len() + self.connections.len();
        self.parts.clear();
        self.connections.clear();
        released
    }
}

fn sync<Id, K>(
    cache: &mut HashMap<Id, CachedMesh<K>>,
    wanted: Vec<(Id, K)>,
    build: impl Fn(&K) -> Vec<Vector3<f64>>,
) -> MeshCacheStats
where
    Id: Eq + Hash + Copy,
    K: PartialEq,
{
    let mut stats = MeshCacheStats::default();

    let before = cache.len();
    cache.retain(|id, _| wanted.iter().any(|(w, _)| w == id));
    stats.released += before - cache.len();

    for (id, key) in wanted {
        match cache.get(&id) {
            Some(cached) if cached.key == key => stats.reused += 1,
            existing => {
                if existing.is_some() {
                    stats.released += 1;
                }
                let positions = build(&key);
                cache.insert(id, CachedMesh { key, positions });
                stats.generated += 1;
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{PartKind, SegmentProfile, Slot};
    use pretty_assertions::assert_eq;

    fn fuselage_pair() -> (PartsStorage, PartId, PartId) {
        let (storage, a) = PartsStorage::new().add_part(PartKind::Fuselage);
        let (storage, b) = storage.add_part(PartKind::FuelTank);
        (storage.attach(a, b, Slot::Back), a, b)
    }

    #[test]
    fn test_first_refresh_generates_everything() {
        let (storage, a, b) = fuselage_pair();
        let mut cache = MeshCache::new();
        let stats = cache.refresh(&storage);
        assert_eq!(
            stats,
            MeshCacheStats {
                generated: 3,
                reused: 0,
                released: 0
            }
        );
        assert!(cache.part_mesh(a).is_some());
        assert!(cache.connection_mesh(a, b).is_some());
        assert_eq!(cache.last_stats(), stats);
    }

    #[test]
    fn test_unchanged_inputs_are_reused() {
        let (storage, _, _) = fuselage_pair();
        let mut cache = MeshCache::new();
        cache.refresh(&storage);
        let stats = cache.refresh(&storage.select_part(Some(PartId(0))));
        assert_eq!(stats.generated, 0);
        assert_eq!(stats.reused, 3);
    }

    #[test]
    fn test_reshape_rebuilds_part_and_its_connection() {
        let (storage, a, _) = fuselage_pair();
        let mut cache = MeshCache::new();
        cache.refresh(&storage);

        let mut shape = storage
            .find_part(a)
            .map(|p| p.shape_segments.clone())
            .unwrap_or_default();
        shape.back = SegmentProfile::rounded(8, 0.5, 0.5);
        let storage = storage.set_shape(a, shape).unwrap();

        let stats = cache.refresh(&storage);
        assert_eq!(
            stats,
            MeshCacheStats {
                generated: 2,
                reused: 1,
                released: 2
            }
        );
    }

    #[test]
    fn test_moving_a_part_only_rebuilds_connections() {
        let (storage, a, _) = fuselage_pair();
        let mut cache = MeshCache::new();
        cache.refresh(&storage);

        let storage = storage
            .set_transform(a, Vector3::new(0.0, 1.0, 0.0), Vector3::zeros())
            .unwrap();
        let stats = cache.refresh(&storage);
        assert_eq!(stats.generated, 1);
        assert_eq!(stats.reused, 2);
    }

    #[test]
    fn test_removed_parts_are_released() {
        let (storage, a, b) = fuselage_pair();
        let mut cache = MeshCache::new();
        cache.refresh(&storage);

        let stats = cache.refresh(&storage.remove_part(b));
        assert_eq!(stats.released, 2);
        assert_eq!(cache.part_count(), 1);
        assert_eq!(cache.connection_count(), 0);
        assert!(cache.connection_mesh(a, b).is_none());
        assert_eq!(cache.clear(), 1);
    }
}
