use nalgebra::Vector3;

use crate::assembly::PartsStorage;
use crate::components::{Part, PartId, SegmentProfile, ShapeSegments, Slot};
use crate::geometry::{build_bridge, generate_profile, Ring};
use crate::utils::euler_rotation;

/// Front and back profiles with the shared center pinch and slant folded in.
pub fn effective_profiles(shape: &ShapeSegments) -> [SegmentProfile; 2] {
    let apply = |profile: &SegmentProfile| SegmentProfile {
        pinch_x: profile.pinch_x + shape.center.pinch,
        slant: profile.slant + shape.center.slant,
        ..profile.clone()
    };
    [apply(&shape.front), apply(&shape.back)]
}

/// The part's rings in its local frame, ordered front to back.
///
/// The front ring sits at `z = -length/2` shifted by the center offsets, the
/// back ring at `z = +length/2`.
pub fn derive_rings(shape: &ShapeSegments) -> Vec<Ring> {
    let [front, back] = effective_profiles(shape);
    let half = shape.length() / 2.0;
    let front_shift = Vector3::new(shape.center.offset_x, shape.center.offset_y, -half);
    let back_shift = Vector3::new(0.0, 0.0, half);

    vec![
        translate(generate_profile(&front), &front_shift),
        translate(generate_profile(&back), &back_shift),
    ]
}

fn translate(ring: Ring, shift: &Vector3<f64>) -> Ring {
    ring.into_iter().map(|p| p + shift).collect()
}

/// Bridge every adjacent ring pair of a chain.
pub fn build_chain(rings: &[Ring]) -> Vec<Vector3<f64>> {
    rings
        .windows(2)
        .flat_map(|pair| build_bridge(&pair[0], &pair[1]))
        .collect()
}

/// Local-frame mesh of one part.
pub fn build_part_mesh(shape: &ShapeSegments) -> Vec<Vector3<f64>> {
    build_chain(&derive_rings(shape))
}

/// A part's shape together with where it sits in the world.
///
/// This is everything a connection mesh depends on, so it doubles as the
/// cache key for one.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape {
    pub shape: ShapeSegments,
    pub pos: Vector3<f64>,
    pub rot: Vector3<f64>,
}

impl PlacedShape {
    pub fn of(part: &Part) -> Self {
        Self {
            shape: part.shape_segments.clone(),
            pos: part.pos,
            rot: part.rot,
        }
    }

    pub fn to_world(&self, ring: &[Vector3<f64>]) -> Ring {
        let rotation = euler_rotation(&self.rot);
        ring.iter().map(|p| self.pos + rotation * p).collect()
    }
}

/// A ring moved from the part's local frame into world space.
pub fn world_ring(part: &Part, ring: &[Vector3<f64>]) -> Ring {
    PlacedShape::of(part).to_world(ring)
}

/// Pairs `(a, b)` where `b` hangs off `a`'s back slot and both are fuselage-like.
pub fn connection_pairs(storage: &PartsStorage) -> Vec<(PartId, PartId)> {
    storage
        .parts
        .iter()
        .filter(|a| a.kind.is_fuselage_like())
        .flat_map(|a| {
            a.attached_ids(Slot::Back)
                .filter(move |b| {
                    storage
                        .find_part(*b)
                        .is_some_and(|b| b.kind.is_fuselage_like())
                })
                .map(move |b| (a.id, b))
        })
        .collect()
}

/// World-space skin between `a`'s back ring and `b`'s front ring.
///
/// `None` when either part is missing or `b` is not on `a`'s back slot.
pub fn build_connection_mesh(
    storage: &PartsStorage,
    a: PartId,
    b: PartId,
) -> Option<Vec<Vector3<f64>>> {
    let part_a = storage.find_part(a)?;
    let part_b = storage.find_part(b)?;
    if part_a.attached.slot_of(b) != Some(Slot::Back) {
        return None;
    }
    Some(bridge_placed(&PlacedShape::of(part_a), &PlacedShape::of(part_b)))
}

/// Bridge the last ring of `a` to the first ring of `b`, both in world space.
pub fn bridge_placed(a: &PlacedShape, b: &PlacedShape) -> Vec<Vector3<f64>> {
    let rings_a = derive_rings(&a.shape);
    let rings_b = derive_rings(&b.shape);
    match (rings_a.last(), rings_b.first()) {
        (Some(back), Some(front)) => build_bridge(&a.to_world(back), &b.to_world(front)),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CenterParams, PartKind};
    use approx::assert_relative_eq;

    fn tube(count: usize, length: f64) -> ShapeSegments {
        ShapeSegments::prism(SegmentProfile::rounded(count, 2.0, 2.0), length)
    }

    #[test]
    fn test_rings_sit_at_half_length() {
        let rings = derive_rings(&tube(8, 4.0));
        assert_eq!(rings.len(), 2);
        assert!(rings[0].iter().all(|p| p.z == -2.0));
        assert!(rings[1].iter().all(|p| p.z == 2.0));
        assert_relative_eq!(rings[0][0], Vector3::new(1.0, 0.0, -2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_center_offsets_shift_front_ring() {
        let shape = ShapeSegments::new(
            SegmentProfile::rounded(8, 2.0, 2.0),
            SegmentProfile::rounded(8, 2.0, 2.0),
            CenterParams {
                length: 2.0,
                offset_x: 0.5,
                offset_y: -0.25,
                pinch: 0.0,
                slant: 0.0,
            },
        );
        let rings = derive_rings(&shape);
        assert_relative_eq!(rings[0][0], Vector3::new(1.5, -0.25, -1.0), epsilon = 1e-12);
        assert_relative_eq!(rings[1][0], Vector3::new(1.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_center_pinch_and_slant_fold_into_both_ends() {
        let mut shape = tube(8, 1.0);
        shape.center.pinch = 0.2;
        shape.center.slant = 0.1;
        let [front, back] = effective_profiles(&shape);
        assert_eq!(front.pinch_x, 0.2);
        assert_eq!(back.slant, 0.1);
    }

    #[test]
    fn test_part_mesh_bridges_mismatched_ends() {
        let shape = ShapeSegments::new(
            SegmentProfile::rounded(8, 1.0, 1.0),
            SegmentProfile::rounded(16, 1.0, 1.0),
            CenterParams::with_length(3.0),
        );
        assert_eq!(build_part_mesh(&shape).len(), 96);
    }

    #[test]
    fn test_world_ring_applies_transform() {
        let mut part = Part::new(PartId(0), PartKind::Fuselage);
        part.pos = Vector3::new(0.0, 5.0, 0.0);
        part.rot = Vector3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0);
        let ring = world_ring(&part, &[Vector3::new(0.0, 0.0, 1.0)]);
        assert_relative_eq!(ring[0], Vector3::new(1.0, 5.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_connection_only_for_back_slot_fuselages() {
        let (storage, a) = PartsStorage::new().add_part(PartKind::Fuselage);
        let (storage, b) = storage.add_part(PartKind::FuelTank);
        let (storage, wing) = storage.add_part(PartKind::Wing);
        let storage = storage.attach(a, b, Slot::Back).attach(a, wing, Slot::Side);

        assert_eq!(connection_pairs(&storage), vec![(a, b)]);
        assert!(build_connection_mesh(&storage, a, b).is_some_and(|m| !m.is_empty()));
        assert!(build_connection_mesh(&storage, b, a).is_none());
        assert!(build_connection_mesh(&storage, a, wing).is_none());
    }
}
