use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::assembly::{validator, AssemblyError, AttachRejection};
use crate::components::{AttachedPart, Part, PartId, PartKind, Slot};

/// The whole assembly: an arena of parts keyed by id plus the editor selection.
///
/// Parts refer to each other only by id. Every mutation takes `&self` and
/// returns a fresh value; the committed resource is only ever replaced
/// wholesale.
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartsStorage {
    pub parts: Vec<Part>,
    #[serde(default)]
    pub selected_part: Option<PartId>,
}

impl PartsStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            parts,
            selected_part: None,
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn find_part(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub(crate) fn find_part_mut(&mut self, id: PartId) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PartId) -> bool {
        self.find_part(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = PartId> + '_ {
        self.parts.iter().map(|p| p.id)
    }

    /// Ids listed under `slot` on `id`; empty for a missing part.
    pub fn attached_ids(&self, id: PartId, slot: Slot) -> Vec<PartId> {
        self.find_part(id)
            .map(|p| p.attached_ids(slot).collect())
            .unwrap_or_default()
    }

    /// Next free id: one past the largest id in use, or 0 for an empty assembly.
    pub fn next_id(&self) -> PartId {
        self.parts
            .iter()
            .map(|p| p.id.0)
            .max()
            .map_or(PartId(0), |max| PartId(max + 1))
    }

    /// Add a part of `kind` at the origin. Returns the new state and the id it got.
    pub fn add_part(&self, kind: PartKind) -> (Self, PartId) {
        let id = self.next_id();
        let mut next = self.clone();
        next.parts.push(Part::new(id, kind));
        debug!("Added {} part {}", kind, id);
        (next, id)
    }

    /// Add a part by registry name; an unknown name is a configuration error.
    pub fn add_part_named(&self, kind: &str) -> Result<(Self, PartId), AssemblyError> {
        let kind: PartKind = kind.parse()?;
        Ok(self.add_part(kind))
    }

    /// Remove a part and every reference to it held by other parts.
    pub fn remove_part(&self, id: PartId) -> Self {
        let mut next = self.clone();
        next.parts.retain(|p| p.id != id);
        for part in &mut next.parts {
            part.attached.remove(id);
        }
        if next.selected_part == Some(id) {
            next.selected_part = None;
        }
        next
    }

    /// Remove a part together with the subtree hanging off it, as seen from
    /// the root of its component.
    pub fn remove_part_cascade(&self, id: PartId) -> Self {
        let doomed = validator::subtree(self, id);
        let mut next = self.clone();
        next.parts.retain(|p| !doomed.contains(&p.id));
        for part in &mut next.parts {
            for gone in &doomed {
                part.attached.remove(*gone);
            }
        }
        if next.selected_part.is_some_and(|s| doomed.contains(&s)) {
            next.selected_part = None;
        }
        next
    }

    /// Overwrite one part's transform without touching its neighbours.
    pub fn set_transform(
        &self,
        id: PartId,
        pos: Vector3<f64>,
        rot: Vector3<f64>,
    ) -> Result<Self, AssemblyError> {
        let mut next = self.clone();
        let part = next
            .find_part_mut(id)
            .ok_or(AssemblyError::PartNotFound(id))?;
        part.pos = pos;
        part.rot = rot;
        Ok(next)
    }

    /// Mark one part as selected, clearing the flag on every other part.
    pub fn select_part(&self, id: Option<PartId>) -> Self {
        let mut next = self.clone();
        let id = id.filter(|id| self.contains(*id));
        for part in &mut next.parts {
            part.selected = Some(part.id) == id;
        }
        next.selected_part = id;
        next
    }

    /// Connect `b` to `a`'s `slot`, validating first.
    ///
    /// On success both sides are written in the same copy: `a` lists `b`
    /// under `slot` and `b` lists `a` under the complementary slot.
    pub fn try_attach(&self, a: PartId, b: PartId, slot: Slot) -> Result<Self, AttachRejection> {
        validator::check_attach(self, a, b)?;

        let mut next = self.clone();
        if let Some(part) = next.find_part_mut(a) {
            part.attached.slot_mut(slot).push(AttachedPart { id: b });
        }
        if let Some(part) = next.find_part_mut(b) {
            part.attached
                .slot_mut(slot.complement())
                .push(AttachedPart { id: a });
        }
        Ok(next)
    }

    /// Like [`try_attach`](Self::try_attach), but a rejection is logged and the
    /// unchanged state is returned.
    pub fn attach(&self, a: PartId, b: PartId, slot: Slot) -> Self {
        match self.try_attach(a, b, slot) {
            Ok(next) => next,
            Err(rejection) => {
                warn!("Attach request rejected: {}", rejection);
                self.clone()
            }
        }
    }

    /// Remove the connection between `a` and `b` on both sides, across all slots.
    pub fn detach_parts_by_id(&self, a: PartId, b: PartId) -> Self {
        let mut next = self.clone();
        if let Some(part) = next.find_part_mut(a) {
            part.attached.remove(b);
        }
        if let Some(part) = next.find_part_mut(b) {
            part.attached.remove(a);
        }
        next
    }

    /// Disconnect a part from all of its neighbours.
    pub fn detach_all(&self, id: PartId) -> Self {
        let neighbours: Vec<PartId> = self
            .find_part(id)
            .map(|p| p.attached.all_ids().collect())
            .unwrap_or_default();
        neighbours
            .into_iter()
            .fold(self.clone(), |state, other| state.detach_parts_by_id(id, other))
    }

    /// Replace the shape of one part.
    pub fn set_shape(
        &self,
        id: PartId,
        shape: crate::components::ShapeSegments,
    ) -> Result<Self, AssemblyError> {
        let mut next = self.clone();
        next.find_part_mut(id)
            .ok_or(AssemblyError::PartNotFound(id))?
            .shape_segments = shape;
        Ok(next)
    }
}
