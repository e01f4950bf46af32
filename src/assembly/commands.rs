use bevy::prelude::*;
use nalgebra::Vector3;

use crate::assembly::{propagate, PartsStorage};
use crate::components::{PartId, PartKind, ShapeSegments, Slot};

/// One editor transaction against the assembly.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum AssemblyCommand {
    Add(PartKind),
    Remove(PartId),
    RemoveCascade(PartId),
    Attach { a: PartId, b: PartId, slot: Slot },
    AttachSnapped { a: PartId, b: PartId, slot: Slot },
    Detach { a: PartId, b: PartId },
    Move {
        part: PartId,
        position_delta: Vector3<f64>,
        rotation_delta: Vector3<f64>,
    },
    Reshape { part: PartId, shape: ShapeSegments },
    Select(Option<PartId>),
}

impl AssemblyCommand {
    /// Apply to a snapshot, producing the next one.
    ///
    /// Failures are expected editor outcomes: they are logged and the
    /// snapshot comes back unchanged.
    pub fn apply(&self, storage: &PartsStorage) -> PartsStorage {
        match self {
            AssemblyCommand::Add(kind) => storage.add_part(*kind).0,
            AssemblyCommand::Remove(id) => storage.remove_part(*id),
            AssemblyCommand::RemoveCascade(id) => storage.remove_part_cascade(*id),
            AssemblyCommand::Attach { a, b, slot } => storage.attach(*a, *b, *slot),
            AssemblyCommand::AttachSnapped { a, b, slot } => {
                storage.attach_snapped(*a, *b, *slot).unwrap_or_else(|rejection| {
                    warn!("Attach request rejected: {}", rejection);
                    storage.clone()
                })
            }
            AssemblyCommand::Detach { a, b } => storage.detach_parts_by_id(*a, *b),
            AssemblyCommand::Move {
                part,
                position_delta,
                rotation_delta,
            } => propagate(storage, *part, *position_delta, *rotation_delta).unwrap_or_else(|e| {
                warn!("Move ignored: {}", e);
                storage.clone()
            }),
            AssemblyCommand::Reshape { part, shape } => storage
                .set_shape(*part, shape.clone())
                .unwrap_or_else(|e| {
                    warn!("Reshape ignored: {}", e);
                    storage.clone()
                }),
            AssemblyCommand::Select(id) => storage.select_part(*id),
        }
    }
}
