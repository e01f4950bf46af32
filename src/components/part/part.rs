use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::part::{PartKind, ShapeSegments};

/// Unique identifier of a part inside one assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(pub u32);

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Attachment slot on a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Front,
    Back,
    Side,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Front, Slot::Back, Slot::Side];

    /// Slot the other part must list us under.
    pub fn complement(&self) -> Slot {
        match self {
            Slot::Front => Slot::Back,
            Slot::Back => Slot::Front,
            Slot::Side => Slot::Side,
        }
    }
}

/// One end of a bidirectional connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachedPart {
    pub id: PartId,
}

/// Per-slot adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attachments {
    #[serde(default)]
    pub front: Vec<AttachedPart>,
    #[serde(default)]
    pub back: Vec<AttachedPart>,
    #[serde(default)]
    pub side: Vec<AttachedPart>,
}

impl Attachments {
    pub fn slot(&self, slot: Slot) -> &[AttachedPart] {
        match slot {
            Slot::Front => &self.front,
            Slot::Back => &self.back,
            Slot::Side => &self.side,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut Vec<AttachedPart> {
        match slot {
            Slot::Front => &mut self.front,
            Slot::Back => &mut self.back,
            Slot::Side => &mut self.side,
        }
    }

    /// Every neighbour id across all slots, in slot order.
    pub fn all_ids(&self) -> impl Iterator<Item = PartId> + '_ {
        Slot::ALL
            .into_iter()
            .flat_map(move |slot| self.slot(slot).iter().map(|a| a.id))
    }

    /// Slot under which `id` is listed, if any.
    pub fn slot_of(&self, id: PartId) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|slot| self.slot(*slot).iter().any(|a| a.id == id))
    }

    pub fn contains(&self, id: PartId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Remove `id` from every slot.
    pub fn remove(&mut self, id: PartId) {
        for slot in Slot::ALL {
            self.slot_mut(slot).retain(|a| a.id != id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty() && self.side.is_empty()
    }
}

/// A node in the assembly graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    #[serde(rename = "type")]
    pub kind: PartKind,
    /// Position (m).
    pub pos: Vector3<f64>,
    /// Euler angles `(pitch, yaw, roll)` in radians.
    pub rot: Vector3<f64>,
    pub shape_segments: ShapeSegments,
    #[serde(default)]
    pub attached: Attachments,
    /// Editor flag, carried through every mutation untouched.
    #[serde(default)]
    pub selected: bool,
    /// Editor flag, carried through every mutation untouched.
    #[serde(default)]
    pub drag: bool,
}

impl Part {
    /// A part at the origin with the registry's default shape.
    pub fn new(id: PartId, kind: PartKind) -> Self {
        Self {
            id,
            kind,
            pos: Vector3::zeros(),
            rot: Vector3::zeros(),
            shape_segments: kind.default_segments(),
            attached: Attachments::default(),
            selected: false,
            drag: false,
        }
    }

    pub fn attached_ids(&self, slot: Slot) -> impl Iterator<Item = PartId> + '_ {
        self.attached.slot(slot).iter().map(|a| a.id)
    }
}
