use bevy::prelude::*;
use nalgebra::Vector3;
use std::collections::HashSet;

use crate::assembly::{AssemblyError, AttachRejection, PartsStorage};
use crate::components::{PartId, Slot};
use crate::utils::{euler_rotation, is_zero, rotate_about_pivot};

/// Move `root` by `position_delta` and turn it by `rotation_delta`, carrying
/// every transitively attached part along.
///
/// Each attached part keeps its offset from its immediate parent, re-expressed
/// under the parent's new orientation: the part is rotated about the parent's
/// old position by `rotation_delta` and then follows the parent's translation.
/// Rotations are Euler triples (see [`euler_rotation`]) and accumulate
/// additively on every moved part.
///
/// A zero translation and zero rotation returns the input unchanged, bit for bit.
pub fn propagate(
    storage: &PartsStorage,
    root: PartId,
    position_delta: Vector3<f64>,
    rotation_delta: Vector3<f64>,
) -> Result<PartsStorage, AssemblyError> {
    let root_part = storage
        .find_part(root)
        .ok_or(AssemblyError::PartNotFound(root))?;

    if is_zero(&position_delta) && is_zero(&rotation_delta) {
        return Ok(storage.clone());
    }

    let rotating = !is_zero(&rotation_delta);
    let rotation = euler_rotation(&rotation_delta);

    let mut next = storage.clone();
    let root_old = root_part.pos;
    let root_new = root_old + position_delta;
    if let Some(part) = next.find_part_mut(root) {
        part.pos = root_new;
        part.rot += rotation_delta;
    }

    let mut visited = HashSet::from([root]);
    // (part, parent position before, parent position after)
    let mut stack: Vec<(PartId, Vector3<f64>, Vector3<f64>)> = root_part
        .attached
        .all_ids()
        .map(|child| (child, root_old, root_new))
        .collect();

    while let Some((id, parent_old, parent_new)) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let Some(original) = storage.find_part(id) else {
            warn!("Skipping dangling attachment to missing part {}", id);
            continue;
        };

        let old = original.pos;
        let new = if rotating {
            parent_new + rotate_about_pivot(&old, &parent_old, &rotation) - parent_old
        } else {
            old + position_delta
        };

        if let Some(part) = next.find_part_mut(id) {
            part.pos = new;
            part.rot += rotation_delta;
        }

        stack.extend(
            original
                .attached
                .all_ids()
                .filter(|child| !visited.contains(child))
                .map(|child| (child, old, new)),
        );
    }

    Ok(next)
}

/// Position of `b` expressed in `a`'s local frame, derived from the stored transforms.
pub fn relative_offset(storage: &PartsStorage, a: PartId, b: PartId) -> Option<Vector3<f64>> {
    let part_a = storage.find_part(a)?;
    let part_b = storage.find_part(b)?;
    Some(euler_rotation(&part_a.rot).inverse() * (part_b.pos - part_a.pos))
}

/// Offset, in `a`'s local frame, at which `b` sits flush against `a`'s `slot` face.
fn slot_face_offset(storage: &PartsStorage, a: PartId, b: PartId, slot: Slot) -> Vector3<f64> {
    let size = |id| {
        storage
            .find_part(id)
            .map(|p| (p.kind.default_size()[0], p.shape_segments.length()))
            .unwrap_or((0.0, 0.0))
    };
    let (width_a, length_a) = size(a);
    let (width_b, length_b) = size(b);
    let reach = 0.5 * (length_a + length_b);
    match slot {
        Slot::Front => Vector3::new(0.0, 0.0, -reach),
        Slot::Back => Vector3::new(0.0, 0.0, reach),
        Slot::Side => Vector3::new(0.5 * (width_a + width_b), 0.0, 0.0),
    }
}

impl PartsStorage {
    /// Attach `b` to `a`'s `slot` and move `b`'s whole component so `b` sits
    /// flush against that face with `a`'s orientation.
    pub fn attach_snapped(
        &self,
        a: PartId,
        b: PartId,
        slot: Slot,
    ) -> Result<Self, AttachRejection> {
        crate::assembly::validator::check_attach(self, a, b)?;
        let (Some(part_a), Some(part_b)) = (self.find_part(a), self.find_part(b)) else {
            return Err(AttachRejection::PartNotFound(a));
        };

        let target = part_a.pos
            + euler_rotation(&part_a.rot) * slot_face_offset(self, a, b, slot);
        let rotation_delta = part_a.rot - part_b.rot;

        // The two parts are still in separate components here, so moving b
        // cannot drag a along.
        let moved = propagate(self, b, target - part_b.pos, rotation_delta)
            .map_err(|_| AttachRejection::PartNotFound(b))?;
        moved.try_attach(a, b, slot)
    }
}
